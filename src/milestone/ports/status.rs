//! Repository port for per-team milestone status records.

use crate::milestone::domain::{MilestoneId, TeamMilestoneStatus};
use crate::roster::domain::TeamId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for status repository operations.
pub type MilestoneStatusRepositoryResult<T> = Result<T, MilestoneStatusRepositoryError>;

/// Team milestone status persistence contract.
///
/// The (team, milestone) pair is the record identity; `upsert` covers both
/// first submission and later overwrites, matching the tracker's
/// load-or-create flow.
#[async_trait]
pub trait MilestoneStatusRepository: Send + Sync {
    /// Inserts or overwrites the status record for its (team, milestone)
    /// pair.
    async fn upsert(&self, status: &TeamMilestoneStatus) -> MilestoneStatusRepositoryResult<()>;

    /// Finds the status record for a (team, milestone) pair.
    ///
    /// Returns `None` when the team has not submitted anything yet.
    async fn find(
        &self,
        team_id: TeamId,
        milestone_id: MilestoneId,
    ) -> MilestoneStatusRepositoryResult<Option<TeamMilestoneStatus>>;
}

/// Errors returned by status repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MilestoneStatusRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MilestoneStatusRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
