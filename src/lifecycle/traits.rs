// Traits for dependency injection - the lifecycle machine only sees this seam

use crate::lifecycle::types::CareAction;

/// Health interface of a plant under care
pub trait PlantHealth {
    /// Apply a health delta; clamping is the plant's business
    fn modify_health(&mut self, delta: i32);

    /// Current health level
    fn health_level(&self) -> i32;

    /// Note that a care action happened
    fn record_care(&mut self, _action: CareAction) {}
}
