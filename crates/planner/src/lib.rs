pub mod advisor;
pub mod checker;
pub mod error;
pub mod locks;
pub mod memory;
pub mod mover;
pub mod resolver;
pub mod slots;
pub mod store;

#[cfg(test)]
mod testing;

pub use advisor::{Advisor, NewPlan};
pub use checker::{MoveRequest, MoveStatus};
pub use error::{ErrorKind, PlanError, PlanResult};
pub use slots::SlotAssignment;
