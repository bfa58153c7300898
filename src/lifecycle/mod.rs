// Plant Lifecycle Module - stage-aware care behind a state machine
//
// The plant is injected through the PlantHealth trait so the machine can be
// exercised without a real greenhouse.

pub mod types;
pub mod traits;
pub mod state_machine;

#[cfg(test)]
pub mod mocks;

#[cfg(test)]
pub mod tests;

pub use types::{CareAction, GrowthThresholds, HealthReport, LifecycleStage, ParseStageError};
pub use traits::PlantHealth;
pub use state_machine::{LifecycleError, LifecycleEvent, LifecycleStateMachine, PlantHandle};
