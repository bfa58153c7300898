// Mock receivers for testing - no side effects beyond a shared journal

use std::cell::RefCell;
use std::rc::Rc;

use crate::staff::command::ActionKind;
use crate::staff::traits::*;

/// Ordered record of receiver calls, shared between mocks
pub type Journal = Rc<RefCell<Vec<(String, ActionKind)>>>;

pub fn new_journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

#[derive(Debug)]
pub struct MockPlantCare {
    pub name: String,
    pub journal: Journal,
    pub general_duties: RefCell<u32>,
}

impl MockPlantCare {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            journal: Rc::clone(journal),
            general_duties: RefCell::new(0),
        }
    }

    fn record(&self, action: ActionKind) {
        self.journal.borrow_mut().push((self.name.clone(), action));
    }
}

impl StaffMember for MockPlantCare {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> StaffRole {
        StaffRole::PlantCare
    }

    fn perform_duties(&self) {
        *self.general_duties.borrow_mut() += 1;
    }
}

impl PlantCareDuties for MockPlantCare {
    fn water_plants(&self) {
        self.record(ActionKind::Water);
    }

    fn prune_plants(&self) {
        self.record(ActionKind::Prune);
    }

    fn fertilize_plants(&self) {
        self.record(ActionKind::Fertilize);
    }
}

#[derive(Debug)]
pub struct MockSales {
    pub name: String,
    pub journal: Journal,
}

impl MockSales {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            journal: Rc::clone(journal),
        }
    }
}

impl StaffMember for MockSales {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> StaffRole {
        StaffRole::Sales
    }

    fn perform_duties(&self) {}
}

impl SalesDuties for MockSales {
    fn assist_customer(&self) {
        self.journal
            .borrow_mut()
            .push((self.name.clone(), ActionKind::AssistCustomer));
    }
}
