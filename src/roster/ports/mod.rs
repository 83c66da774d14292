//! Port contracts for team and membership storage.

pub mod repository;

pub use repository::{TeamRepository, TeamRepositoryError, TeamRepositoryResult};
