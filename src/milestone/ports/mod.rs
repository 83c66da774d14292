//! Port contracts for milestone tracking.

pub mod repository;
pub mod status;

pub use repository::{MilestoneRepository, MilestoneRepositoryError, MilestoneRepositoryResult};
pub use status::{
    MilestoneStatusRepository, MilestoneStatusRepositoryError, MilestoneStatusRepositoryResult,
};
