use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lifecycle::types::CareAction;
use crate::lifecycle::traits::PlantHealth;

/// Lowest health a plant can report
pub const MIN_HEALTH: i32 = 0;
/// Highest health a plant can report
pub const MAX_HEALTH: i32 = 100;

/// A plant on the greenhouse floor.
///
/// Health is a 0-100 percentage and is clamped here, never by the
/// components that care for the plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: u32,
    pub species: String,
    health_level: i32,
    times_watered: u32,
    times_fertilized: u32,
    last_cared_at: Option<DateTime<Utc>>,
}

impl Plant {
    /// New plants start fully healthy
    pub fn new(id: u32, species: impl Into<String>) -> Self {
        Self::with_health(id, species, MAX_HEALTH)
    }

    pub fn with_health(id: u32, species: impl Into<String>, health: i32) -> Self {
        Self {
            id,
            species: species.into(),
            health_level: health.clamp(MIN_HEALTH, MAX_HEALTH),
            times_watered: 0,
            times_fertilized: 0,
            last_cared_at: None,
        }
    }

    pub fn set_health_level(&mut self, health: i32) {
        self.health_level = health.clamp(MIN_HEALTH, MAX_HEALTH);
    }

    pub fn is_healthy(&self) -> bool {
        self.health_level > 70
    }

    pub fn times_watered(&self) -> u32 {
        self.times_watered
    }

    pub fn times_fertilized(&self) -> u32 {
        self.times_fertilized
    }

    pub fn last_cared_at(&self) -> Option<DateTime<Utc>> {
        self.last_cared_at
    }
}

impl PlantHealth for Plant {
    fn modify_health(&mut self, delta: i32) {
        self.set_health_level(self.health_level.saturating_add(delta));
    }

    fn health_level(&self) -> i32 {
        self.health_level
    }

    fn record_care(&mut self, action: CareAction) {
        match action {
            CareAction::Water => self.times_watered += 1,
            CareAction::Fertilize => self.times_fertilized += 1,
        }
        self.last_cared_at = Some(Utc::now());
    }
}
