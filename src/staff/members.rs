// Concrete staff roles

use std::cell::Cell;

use crate::staff::traits::*;

/// Staff member looking after the plants
#[derive(Debug)]
pub struct PlantCareStaff {
    name: String,
    duties_performed: Cell<u32>,
}

impl PlantCareStaff {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duties_performed: Cell::new(0),
        }
    }

    pub fn duties_performed(&self) -> u32 {
        self.duties_performed.get()
    }

    fn log_duty(&self, duty: &str) {
        self.duties_performed.set(self.duties_performed.get() + 1);
        tracing::info!(staff = %self.name, role = %self.role(), duty = duty, "Staff duty performed");
    }
}

impl Default for PlantCareStaff {
    fn default() -> Self {
        Self::new("Plant Care Staff")
    }
}

impl StaffMember for PlantCareStaff {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> StaffRole {
        StaffRole::PlantCare
    }

    fn perform_duties(&self) {
        self.log_duty("general plant care");
    }
}

impl PlantCareDuties for PlantCareStaff {
    fn water_plants(&self) {
        self.log_duty("watering plants");
    }

    fn prune_plants(&self) {
        self.log_duty("pruning plants");
    }

    fn fertilize_plants(&self) {
        self.log_duty("fertilizing plants");
    }
}

/// Staff member on the sales floor
#[derive(Debug)]
pub struct SalesStaff {
    name: String,
    customers_assisted: Cell<u32>,
}

impl SalesStaff {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            customers_assisted: Cell::new(0),
        }
    }

    pub fn customers_assisted(&self) -> u32 {
        self.customers_assisted.get()
    }
}

impl Default for SalesStaff {
    fn default() -> Self {
        Self::new("Sales Staff")
    }
}

impl StaffMember for SalesStaff {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> StaffRole {
        StaffRole::Sales
    }

    fn perform_duties(&self) {
        tracing::info!(staff = %self.name, role = %self.role(), "Performing sales duties");
    }
}

impl SalesDuties for SalesStaff {
    fn assist_customer(&self) {
        self.customers_assisted.set(self.customers_assisted.get() + 1);
        tracing::info!(
            staff = %self.name,
            assisted = self.customers_assisted.get(),
            "Assisting a customer"
        );
    }
}
