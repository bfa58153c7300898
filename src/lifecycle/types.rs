// Core types for the plant lifecycle state machine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle stages a plant moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifecycleStage {
    /// Freshly sprouted, needs frequent light care
    #[default]
    Seedling,
    /// Actively putting on growth
    Growing,
    /// Fully grown, stable
    Mature,
    /// In bloom
    Flowering,
    /// Resting out of season
    Dormant,
}

/// Care actions whose effect depends on the stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareAction {
    Water,
    Fertilize,
}

impl LifecycleStage {
    pub const ALL: [LifecycleStage; 5] = [
        LifecycleStage::Seedling,
        LifecycleStage::Growing,
        LifecycleStage::Mature,
        LifecycleStage::Flowering,
        LifecycleStage::Dormant,
    ];

    /// Health delta applied to the plant for a care action in this stage
    pub fn care_delta(self, action: CareAction) -> i32 {
        match (self, action) {
            (LifecycleStage::Seedling, CareAction::Water) => 10,
            (LifecycleStage::Seedling, CareAction::Fertilize) => 5,
            (LifecycleStage::Growing, CareAction::Water) => 15,
            (LifecycleStage::Growing, CareAction::Fertilize) => 10,
            (LifecycleStage::Mature, CareAction::Water) => 10,
            (LifecycleStage::Mature, CareAction::Fertilize) => 5,
            (LifecycleStage::Flowering, CareAction::Water) => 15,
            (LifecycleStage::Flowering, CareAction::Fertilize) => 10,
            (LifecycleStage::Dormant, CareAction::Water) => 5,
            // Dormant plants are not fertilized
            (LifecycleStage::Dormant, CareAction::Fertilize) => 0,
        }
    }

    /// Stage reached automatically from a health check, if any
    pub fn next_on_health(self, health: i32, thresholds: &GrowthThresholds) -> Option<LifecycleStage> {
        match self {
            LifecycleStage::Seedling if health > thresholds.seedling_to_growing => {
                Some(LifecycleStage::Growing)
            }
            LifecycleStage::Growing if health > thresholds.growing_to_mature => {
                Some(LifecycleStage::Mature)
            }
            // Mature, Flowering and Dormant need season or bloom signals
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleStage::Seedling => "seedling",
            LifecycleStage::Growing => "growing",
            LifecycleStage::Mature => "mature",
            LifecycleStage::Flowering => "flowering",
            LifecycleStage::Dormant => "dormant",
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown lifecycle stage: {0}")]
pub struct ParseStageError(pub String);

impl FromStr for LifecycleStage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleStage::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStageError(s.to_string()))
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareAction::Water => f.write_str("water"),
            CareAction::Fertilize => f.write_str("fertilize"),
        }
    }
}

/// Health levels a plant must exceed to advance automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthThresholds {
    pub seedling_to_growing: i32,
    pub growing_to_mature: i32,
}

impl Default for GrowthThresholds {
    fn default() -> Self {
        Self {
            seedling_to_growing: 50,
            growing_to_mature: 80,
        }
    }
}

/// Outcome of a health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub stage_before: LifecycleStage,
    pub stage_after: LifecycleStage,
    pub health: i32,
}

impl HealthReport {
    pub fn transitioned(&self) -> bool {
        self.stage_before != self.stage_after
    }
}
