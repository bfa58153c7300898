// Greenhouse Care Library - plant lifecycle and staff task scheduling
// This exposes the core components for testing and integration

pub mod lifecycle;
pub mod staff;
pub mod plant;
pub mod config;
pub mod telemetry;

// Re-export key types for easy access
pub use lifecycle::{
    CareAction, GrowthThresholds, HealthReport, LifecycleError, LifecycleStage,
    LifecycleStateMachine, PlantHealth,
};
pub use staff::{
    ActionKind, CommandError, PlantCareDuties, PlantCareStaff, RunReport, SalesDuties,
    SalesStaff, StaffCommand, StaffMember, StaffRole, TaskScheduler,
};
pub use plant::Plant;
pub use config::GreenhouseConfig;
pub use telemetry::{init_telemetry, shutdown_telemetry, generate_correlation_id, create_care_span};
