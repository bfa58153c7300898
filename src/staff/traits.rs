// Traits for dependency injection - commands only see receivers through these

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles a staff member can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    PlantCare,
    Sales,
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffRole::PlantCare => f.write_str("Plant Care"),
            StaffRole::Sales => f.write_str("Sales"),
        }
    }
}

/// Anyone working in the greenhouse
pub trait StaffMember {
    fn name(&self) -> &str;

    fn role(&self) -> StaffRole;

    /// General duties outside any scheduled task
    fn perform_duties(&self);
}

/// Plant care operations interface
pub trait PlantCareDuties: StaffMember {
    fn water_plants(&self);

    fn prune_plants(&self);

    fn fertilize_plants(&self);
}

/// Sales floor operations interface
pub trait SalesDuties: StaffMember {
    fn assist_customer(&self);
}
