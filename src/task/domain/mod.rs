//! Domain model for the task lifecycle state machine.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{Task, TaskStatus};
