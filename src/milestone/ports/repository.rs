//! Repository port for milestone definitions.

use crate::milestone::domain::{Milestone, MilestoneId};
use crate::roster::domain::ClassId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for milestone definition repository operations.
pub type MilestoneRepositoryResult<T> = Result<T, MilestoneRepositoryError>;

/// Milestone definition persistence contract.
#[async_trait]
pub trait MilestoneRepository: Send + Sync {
    /// Stores a new milestone definition.
    ///
    /// # Errors
    ///
    /// Returns [`MilestoneRepositoryError::DuplicateMilestone`] when the
    /// milestone ID already exists.
    async fn store(&self, milestone: &Milestone) -> MilestoneRepositoryResult<()>;

    /// Finds a milestone definition by identifier.
    ///
    /// Returns `None` when the milestone does not exist.
    async fn find_by_id(&self, id: MilestoneId) -> MilestoneRepositoryResult<Option<Milestone>>;

    /// Returns all milestone definitions of a class in definition order.
    ///
    /// The order is authoritative; callers present milestones exactly as
    /// returned.
    async fn list_for_class(&self, class_id: ClassId) -> MilestoneRepositoryResult<Vec<Milestone>>;
}

/// Errors returned by milestone definition repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MilestoneRepositoryError {
    /// A milestone with the same identifier already exists.
    #[error("duplicate milestone identifier: {0}")]
    DuplicateMilestone(MilestoneId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MilestoneRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
