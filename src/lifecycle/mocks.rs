// Mock plant for testing - records every health change

use crate::lifecycle::traits::PlantHealth;
use crate::lifecycle::types::CareAction;

/// Unclamped plant that remembers the deltas it received
#[derive(Debug, Default)]
pub struct MockPlant {
    pub health: i32,
    pub deltas: Vec<i32>,
    pub care_log: Vec<CareAction>,
}

impl MockPlant {
    pub fn with_health(health: i32) -> Self {
        Self {
            health,
            ..Default::default()
        }
    }
}

impl PlantHealth for MockPlant {
    fn modify_health(&mut self, delta: i32) {
        self.deltas.push(delta);
        self.health += delta;
    }

    fn health_level(&self) -> i32 {
        self.health
    }

    fn record_care(&mut self, action: CareAction) {
        self.care_log.push(action);
    }
}
