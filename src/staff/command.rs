// Staff commands - one value type, dispatched through a table on the action kind

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::{Rc, Weak};
use thiserror::Error;
use uuid::Uuid;

use crate::staff::traits::*;

/// Actions a command can defer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Water,
    Fertilize,
    Prune,
    AssistCustomer,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Water,
        ActionKind::Fertilize,
        ActionKind::Prune,
        ActionKind::AssistCustomer,
    ];

    /// Role the receiver must hold to carry out this action
    pub fn required_role(self) -> StaffRole {
        match self {
            ActionKind::Water | ActionKind::Fertilize | ActionKind::Prune => StaffRole::PlantCare,
            ActionKind::AssistCustomer => StaffRole::Sales,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActionKind::Water => "water",
            ActionKind::Fertilize => "fertilize",
            ActionKind::Prune => "prune",
            ActionKind::AssistCustomer => "assist-customer",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Receiver for {action} command {command_id} no longer exists")]
    ReceiverDropped { action: ActionKind, command_id: Uuid },
    #[error("{role} staff cannot {action}")]
    RoleMismatch { action: ActionKind, role: StaffRole },
}

/// Non-owning handle to the staff member a command acts on
#[derive(Debug, Clone)]
pub enum Receiver {
    PlantCare(Weak<dyn PlantCareDuties>),
    Sales(Weak<dyn SalesDuties>),
}

impl Receiver {
    pub fn plant_care<R: PlantCareDuties + 'static>(staff: &Rc<R>) -> Self {
        let shared: Rc<dyn PlantCareDuties> = staff.clone();
        Receiver::PlantCare(Rc::downgrade(&shared))
    }

    pub fn sales<R: SalesDuties + 'static>(staff: &Rc<R>) -> Self {
        let shared: Rc<dyn SalesDuties> = staff.clone();
        Receiver::Sales(Rc::downgrade(&shared))
    }

    pub fn role(&self) -> StaffRole {
        match self {
            Receiver::PlantCare(_) => StaffRole::PlantCare,
            Receiver::Sales(_) => StaffRole::Sales,
        }
    }

    pub fn is_alive(&self) -> bool {
        match self {
            Receiver::PlantCare(staff) => staff.strong_count() > 0,
            Receiver::Sales(staff) => staff.strong_count() > 0,
        }
    }

    /// Name of the receiver, if it still exists
    pub fn name(&self) -> Option<String> {
        match self {
            Receiver::PlantCare(staff) => staff.upgrade().map(|s| s.name().to_string()),
            Receiver::Sales(staff) => staff.upgrade().map(|s| s.name().to_string()),
        }
    }
}

/// A deferred staff action bound to its receiver at construction.
///
/// Commands are immutable and not `Clone`: each id is moved, never copied,
/// so it can only be queued or recorded once.
#[derive(Debug)]
pub struct StaffCommand {
    id: Uuid,
    action: ActionKind,
    receiver: Receiver,
}

impl StaffCommand {
    /// Bind an action to a receiver, rejecting receivers with the wrong role
    pub fn new(action: ActionKind, receiver: Receiver) -> Result<Self, CommandError> {
        if action.required_role() != receiver.role() {
            return Err(CommandError::RoleMismatch {
                action,
                role: receiver.role(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            action,
            receiver,
        })
    }

    pub fn water<R: PlantCareDuties + 'static>(staff: &Rc<R>) -> Self {
        Self::bind(ActionKind::Water, Receiver::plant_care(staff))
    }

    pub fn fertilize<R: PlantCareDuties + 'static>(staff: &Rc<R>) -> Self {
        Self::bind(ActionKind::Fertilize, Receiver::plant_care(staff))
    }

    pub fn prune<R: PlantCareDuties + 'static>(staff: &Rc<R>) -> Self {
        Self::bind(ActionKind::Prune, Receiver::plant_care(staff))
    }

    pub fn assist_customer<R: SalesDuties + 'static>(staff: &Rc<R>) -> Self {
        Self::bind(ActionKind::AssistCustomer, Receiver::sales(staff))
    }

    fn bind(action: ActionKind, receiver: Receiver) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
            receiver,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn action(&self) -> ActionKind {
        self.action
    }

    pub fn receiver(&self) -> &Receiver {
        &self.receiver
    }

    pub fn receiver_name(&self) -> Option<String> {
        self.receiver.name()
    }

    /// Invoke the receiver method for this action
    pub fn execute(&self) -> Result<(), CommandError> {
        match (self.action, &self.receiver) {
            (ActionKind::Water, Receiver::PlantCare(staff)) => self.upgrade(staff)?.water_plants(),
            (ActionKind::Fertilize, Receiver::PlantCare(staff)) => {
                self.upgrade(staff)?.fertilize_plants()
            }
            (ActionKind::Prune, Receiver::PlantCare(staff)) => self.upgrade(staff)?.prune_plants(),
            (ActionKind::AssistCustomer, Receiver::Sales(staff)) => {
                self.upgrade(staff)?.assist_customer()
            }
            (action, receiver) => {
                return Err(CommandError::RoleMismatch {
                    action,
                    role: receiver.role(),
                })
            }
        }
        Ok(())
    }

    fn upgrade<T: ?Sized>(&self, staff: &Weak<T>) -> Result<Rc<T>, CommandError> {
        staff.upgrade().ok_or(CommandError::ReceiverDropped {
            action: self.action,
            command_id: self.id,
        })
    }
}

impl fmt::Display for StaffCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.receiver_name() {
            Some(name) => write!(f, "{} by {}", self.action, name),
            None => write!(f, "{} by <dropped {}>", self.action, self.receiver.role()),
        }
    }
}
