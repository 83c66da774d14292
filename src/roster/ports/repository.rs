//! Repository port for team and membership persistence.

use crate::roster::domain::{StudentId, Team, TeamId, TeamMember};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for team repository operations.
pub type TeamRepositoryResult<T> = Result<T, TeamRepositoryError>;

/// Team and membership persistence contract.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Stores a new team.
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::DuplicateTeam`] when the team ID
    /// already exists.
    async fn store_team(&self, team: &Team) -> TeamRepositoryResult<()>;

    /// Finds a team by identifier.
    ///
    /// Returns `None` when the team does not exist.
    async fn find_team(&self, id: TeamId) -> TeamRepositoryResult<Option<Team>>;

    /// Stores a new membership row.
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::DuplicateMember`] when the
    /// (team, student) pair is already enrolled.
    async fn store_member(&self, member: &TeamMember) -> TeamRepositoryResult<()>;

    /// Finds a membership row by (team, student) pair.
    ///
    /// Returns `None` when the student is not a member of the team.
    async fn find_member(
        &self,
        team_id: TeamId,
        student_id: StudentId,
    ) -> TeamRepositoryResult<Option<TeamMember>>;

    /// Returns all membership rows for a team in enrolment order.
    async fn list_members(&self, team_id: TeamId) -> TeamRepositoryResult<Vec<TeamMember>>;

    /// Persists changes to an existing membership row (currently the
    /// finalized grade).
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::MemberNotFound`] when the pair does not
    /// exist.
    async fn update_member(&self, member: &TeamMember) -> TeamRepositoryResult<()>;
}

/// Errors returned by team repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TeamRepositoryError {
    /// A team with the same identifier already exists.
    #[error("duplicate team identifier: {0}")]
    DuplicateTeam(TeamId),

    /// The (team, student) pair is already enrolled.
    #[error("student {student_id} is already a member of team {team_id}")]
    DuplicateMember {
        /// Team side of the duplicate pair.
        team_id: TeamId,
        /// Student side of the duplicate pair.
        student_id: StudentId,
    },

    /// The membership row was not found.
    #[error("student {student_id} is not a member of team {team_id}")]
    MemberNotFound {
        /// Team side of the missing pair.
        team_id: TeamId,
        /// Student side of the missing pair.
        student_id: StudentId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TeamRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
