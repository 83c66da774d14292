//! Error types for milestone domain validation.

use super::MilestoneId;
use crate::roster::domain::TeamId;
use thiserror::Error;

/// Errors returned while constructing or mutating milestone domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MilestoneDomainError {
    /// The milestone title is empty after trimming.
    #[error("milestone title must not be empty")]
    EmptyTitle,

    /// The milestone has been marked complete; answer and task set are
    /// frozen.
    #[error("milestone {milestone_id} is locked for team {team_id}")]
    Locked {
        /// Team whose submission is frozen.
        team_id: TeamId,
        /// Milestone that has been completed.
        milestone_id: MilestoneId,
    },
}
