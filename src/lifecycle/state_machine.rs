use serde::{Deserialize, Serialize};
use statig::prelude::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use thiserror::Error;

use crate::lifecycle::traits::PlantHealth;
use crate::lifecycle::types::{CareAction, GrowthThresholds, HealthReport, LifecycleStage};

/// Non-owning handle to the plant under care. The caller keeps the plant alive.
pub type PlantHandle = Weak<RefCell<dyn PlantHealth>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    Water,
    Fertilize,
    CheckHealth,
    /// Manual override, always honoured
    SetStage(LifecycleStage),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("No plant is bound to the lifecycle machine")]
    PlantUnbound,
}

/// Shared storage for the stage state machine
pub struct PlantLifecycle {
    plant: Option<PlantHandle>,
    thresholds: GrowthThresholds,
    stage: LifecycleStage,
}

impl PlantLifecycle {
    pub fn new(plant: Option<PlantHandle>, thresholds: GrowthThresholds) -> Self {
        Self {
            plant,
            thresholds,
            stage: LifecycleStage::Seedling,
        }
    }

    pub fn stage(&self) -> LifecycleStage {
        self.stage
    }

    pub fn thresholds(&self) -> GrowthThresholds {
        self.thresholds
    }

    fn live_plant(&self) -> Option<Rc<RefCell<dyn PlantHealth>>> {
        self.plant.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_bound(&self) -> bool {
        self.live_plant().is_some()
    }

    pub fn health_level(&self) -> Option<i32> {
        self.live_plant().map(|plant| plant.borrow().health_level())
    }
}

#[state_machine(initial = "State::seedling()")]
impl PlantLifecycle {
    #[state]
    fn seedling(&mut self, event: &LifecycleEvent) -> Outcome<State> {
        match event {
            LifecycleEvent::CheckHealth => self.advance_on_health(),
            _ => self.handle_common(event),
        }
    }

    #[state]
    fn growing(&mut self, event: &LifecycleEvent) -> Outcome<State> {
        match event {
            LifecycleEvent::CheckHealth => self.advance_on_health(),
            _ => self.handle_common(event),
        }
    }

    #[state]
    fn mature(&mut self, event: &LifecycleEvent) -> Outcome<State> {
        match event {
            LifecycleEvent::CheckHealth => {
                tracing::debug!(
                    stage = %self.stage,
                    health = ?self.health_level(),
                    "Mature plant is stable; flowering or dormancy is decided externally"
                );
                Handled
            }
            _ => self.handle_common(event),
        }
    }

    #[state]
    fn flowering(&mut self, event: &LifecycleEvent) -> Outcome<State> {
        match event {
            LifecycleEvent::CheckHealth => {
                tracing::debug!(
                    stage = %self.stage,
                    health = ?self.health_level(),
                    "Flowering plant checked; blooms indicate peak health"
                );
                Handled
            }
            _ => self.handle_common(event),
        }
    }

    #[state]
    fn dormant(&mut self, event: &LifecycleEvent) -> Outcome<State> {
        match event {
            LifecycleEvent::CheckHealth => {
                tracing::debug!(
                    stage = %self.stage,
                    health = ?self.health_level(),
                    "Dormant plant awaiting active growth season"
                );
                Handled
            }
            _ => self.handle_common(event),
        }
    }
}

impl PlantLifecycle {
    /// Care and manual overrides behave the same in every stage apart from the delta
    fn handle_common(&mut self, event: &LifecycleEvent) -> Outcome<State> {
        match event {
            LifecycleEvent::Water => {
                self.apply_care(CareAction::Water);
                Handled
            }
            LifecycleEvent::Fertilize => {
                self.apply_care(CareAction::Fertilize);
                Handled
            }
            LifecycleEvent::SetStage(stage) => {
                tracing::info!(from = %self.stage, to = %stage, "Stage set manually");
                self.enter(*stage)
            }
            LifecycleEvent::CheckHealth => Handled,
        }
    }

    fn apply_care(&mut self, action: CareAction) {
        let Some(plant) = self.live_plant() else {
            return;
        };
        let delta = self.stage.care_delta(action);
        let mut plant = plant.borrow_mut();
        plant.modify_health(delta);
        plant.record_care(action);
        tracing::info!(
            stage = %self.stage,
            action = %action,
            delta = delta,
            health = plant.health_level(),
            "Applied care"
        );
    }

    fn advance_on_health(&mut self) -> Outcome<State> {
        let Some(health) = self.health_level() else {
            return Handled;
        };
        match self.stage.next_on_health(health, &self.thresholds) {
            Some(next) => {
                tracing::info!(
                    from = %self.stage,
                    to = %next,
                    health = health,
                    "Plant healthy enough to advance"
                );
                self.enter(next)
            }
            None => {
                tracing::debug!(stage = %self.stage, health = health, "No stage change");
                Handled
            }
        }
    }

    fn enter(&mut self, stage: LifecycleStage) -> Outcome<State> {
        self.stage = stage;
        let target = match stage {
            LifecycleStage::Seedling => State::seedling(),
            LifecycleStage::Growing => State::growing(),
            LifecycleStage::Mature => State::mature(),
            LifecycleStage::Flowering => State::flowering(),
            LifecycleStage::Dormant => State::dormant(),
        };
        Transition(target)
    }
}

/// Stage-aware care for a single plant.
///
/// The machine never owns the plant: it holds a weak handle and reports
/// [`LifecycleError::PlantUnbound`] once the plant is gone.
pub struct LifecycleStateMachine {
    machine: StateMachine<PlantLifecycle>,
}

impl LifecycleStateMachine {
    pub fn new<P: PlantHealth + 'static>(plant: &Rc<RefCell<P>>) -> Self {
        Self::with_thresholds(plant, GrowthThresholds::default())
    }

    pub fn with_thresholds<P: PlantHealth + 'static>(
        plant: &Rc<RefCell<P>>,
        thresholds: GrowthThresholds,
    ) -> Self {
        let shared: Rc<RefCell<dyn PlantHealth>> = plant.clone();
        Self::from_handle(Some(Rc::downgrade(&shared)), thresholds)
    }

    /// A machine with no plant; every care operation reports `PlantUnbound`
    pub fn unbound() -> Self {
        Self::from_handle(None, GrowthThresholds::default())
    }

    pub fn from_handle(plant: Option<PlantHandle>, thresholds: GrowthThresholds) -> Self {
        Self {
            machine: PlantLifecycle::new(plant, thresholds).state_machine(),
        }
    }

    pub fn stage(&self) -> LifecycleStage {
        self.machine.inner().stage()
    }

    pub fn is_bound(&self) -> bool {
        self.machine.inner().is_bound()
    }

    pub fn thresholds(&self) -> GrowthThresholds {
        self.machine.inner().thresholds()
    }

    /// Water with the stage's delta, returning the plant's new health
    pub fn water(&mut self) -> Result<i32, LifecycleError> {
        self.care(LifecycleEvent::Water)
    }

    /// Fertilize with the stage's delta, returning the plant's new health
    pub fn fertilize(&mut self) -> Result<i32, LifecycleError> {
        self.care(LifecycleEvent::Fertilize)
    }

    pub fn check_health(&mut self) -> Result<HealthReport, LifecycleError> {
        self.ensure_bound()?;
        let stage_before = self.stage();
        self.machine.handle(&LifecycleEvent::CheckHealth);
        let health = self
            .machine
            .inner()
            .health_level()
            .ok_or(LifecycleError::PlantUnbound)?;
        Ok(HealthReport {
            stage_before,
            stage_after: self.stage(),
            health,
        })
    }

    pub fn set_stage(&mut self, stage: LifecycleStage) {
        self.machine.handle(&LifecycleEvent::SetStage(stage));
    }

    fn care(&mut self, event: LifecycleEvent) -> Result<i32, LifecycleError> {
        self.ensure_bound()?;
        self.machine.handle(&event);
        self.machine
            .inner()
            .health_level()
            .ok_or(LifecycleError::PlantUnbound)
    }

    fn ensure_bound(&self) -> Result<(), LifecycleError> {
        if self.is_bound() {
            Ok(())
        } else {
            tracing::warn!(stage = %self.stage(), "Care requested with no plant bound");
            Err(LifecycleError::PlantUnbound)
        }
    }
}

impl std::fmt::Debug for LifecycleStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleStateMachine")
            .field("stage", &self.stage())
            .field("bound", &self.is_bound())
            .field("thresholds", &self.thresholds())
            .finish()
    }
}
