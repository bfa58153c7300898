// Staff Module - deferred staff tasks and the scheduler that runs them
//
// Receivers are injected through traits so commands can be tested with mocks.

pub mod traits;
pub mod members;
pub mod command;
pub mod scheduler;

#[cfg(test)]
pub mod mocks;


pub use traits::{PlantCareDuties, SalesDuties, StaffMember, StaffRole};
pub use members::{PlantCareStaff, SalesStaff};
pub use command::{ActionKind, CommandError, Receiver, StaffCommand};
pub use scheduler::{HistoryEntry, RunReport, SkippedCommand, TaskScheduler};
