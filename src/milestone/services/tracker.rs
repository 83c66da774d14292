//! Service layer for team milestone submissions and completion.

use crate::milestone::{
    domain::{MilestoneDomainError, MilestoneId, TeamMilestoneStatus, TeamMilestoneView},
    ports::{
        MilestoneRepository, MilestoneRepositoryError, MilestoneStatusRepository,
        MilestoneStatusRepositoryError,
    },
};
use crate::roster::domain::TeamId;
use crate::roster::ports::{TeamRepository, TeamRepositoryError};
use crate::task::domain::TaskId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for milestone tracking operations.
#[derive(Debug, Error)]
pub enum MilestoneTrackerError {
    /// Domain validation failed (including the lock invariant).
    #[error(transparent)]
    Domain(#[from] MilestoneDomainError),

    /// Milestone definition repository operation failed.
    #[error(transparent)]
    Definitions(#[from] MilestoneRepositoryError),

    /// Status repository operation failed.
    #[error(transparent)]
    Statuses(#[from] MilestoneStatusRepositoryError),

    /// Roster repository operation failed.
    #[error(transparent)]
    Roster(#[from] TeamRepositoryError),

    /// The referenced team does not exist.
    #[error("team not found: {0}")]
    UnknownTeam(TeamId),

    /// The referenced milestone does not exist.
    #[error("milestone not found: {0}")]
    UnknownMilestone(MilestoneId),

    /// The operation requires a submitted answer, but the team has no status
    /// record for the milestone yet.
    #[error("team {team_id} has not submitted an answer for milestone {milestone_id}")]
    AnswerRequired {
        /// Team missing a submission.
        team_id: TeamId,
        /// Milestone the operation targeted.
        milestone_id: MilestoneId,
    },
}

/// Result type for milestone tracker operations.
pub type MilestoneTrackerResult<T> = Result<T, MilestoneTrackerError>;

/// Milestone tracking orchestration service.
///
/// Keyed throughout by (team, milestone). Submissions overwrite until
/// [`MilestoneTrackerService::mark_complete`] freezes the record; the
/// supervisor feedback channel stays open afterwards.
#[derive(Clone)]
pub struct MilestoneTrackerService<M, S, T, C>
where
    M: MilestoneRepository,
    S: MilestoneStatusRepository,
    T: TeamRepository,
    C: Clock + Send + Sync,
{
    milestones: Arc<M>,
    statuses: Arc<S>,
    teams: Arc<T>,
    clock: Arc<C>,
}

impl<M, S, T, C> MilestoneTrackerService<M, S, T, C>
where
    M: MilestoneRepository,
    S: MilestoneStatusRepository,
    T: TeamRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new milestone tracker service.
    #[must_use]
    pub const fn new(milestones: Arc<M>, statuses: Arc<S>, teams: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            milestones,
            statuses,
            teams,
            clock,
        }
    }

    /// Records a team's answer and completed-task references for a
    /// milestone, creating the status record on first submission.
    ///
    /// # Errors
    ///
    /// Returns [`MilestoneTrackerError::UnknownTeam`] or
    /// [`MilestoneTrackerError::UnknownMilestone`] when a reference does not
    /// resolve, and [`MilestoneTrackerError::Domain`] wrapping
    /// [`MilestoneDomainError::Locked`] when the milestone has already been
    /// completed; the stored record is unchanged in the locked case.
    pub async fn submit_answer(
        &self,
        team_id: TeamId,
        milestone_id: MilestoneId,
        answer: impl Into<String> + Send,
        completed_task_ids: Vec<TaskId>,
    ) -> MilestoneTrackerResult<TeamMilestoneStatus> {
        self.resolve_references(team_id, milestone_id).await?;

        let mut status = self
            .statuses
            .find(team_id, milestone_id)
            .await?
            .unwrap_or_else(|| TeamMilestoneStatus::new(team_id, milestone_id));

        status.record_answer(answer, completed_task_ids)?;
        self.statuses.upsert(&status).await?;
        Ok(status)
    }

    /// Marks a team's milestone complete, freezing answer and task set.
    ///
    /// # Errors
    ///
    /// Returns [`MilestoneTrackerError::AnswerRequired`] when the team has
    /// never submitted an answer for the milestone.
    pub async fn mark_complete(
        &self,
        team_id: TeamId,
        milestone_id: MilestoneId,
    ) -> MilestoneTrackerResult<TeamMilestoneStatus> {
        let mut status = self.statuses.find(team_id, milestone_id).await?.ok_or(
            MilestoneTrackerError::AnswerRequired {
                team_id,
                milestone_id,
            },
        )?;

        status.mark_complete(&*self.clock);
        self.statuses.upsert(&status).await?;
        Ok(status)
    }

    /// Records supervisor feedback on a team's milestone submission.
    ///
    /// Feedback is the one field that stays writable after completion.
    ///
    /// # Errors
    ///
    /// Returns [`MilestoneTrackerError::AnswerRequired`] when there is no
    /// submission to attach feedback to.
    pub async fn record_feedback(
        &self,
        team_id: TeamId,
        milestone_id: MilestoneId,
        feedback: impl Into<String> + Send,
    ) -> MilestoneTrackerResult<TeamMilestoneStatus> {
        let mut status = self.statuses.find(team_id, milestone_id).await?.ok_or(
            MilestoneTrackerError::AnswerRequired {
                team_id,
                milestone_id,
            },
        )?;

        status.record_feedback(feedback);
        self.statuses.upsert(&status).await?;
        Ok(status)
    }

    /// Returns one merged view per milestone of the team's class, in
    /// definition order, defaulting to an empty incomplete submission where
    /// no status record exists.
    ///
    /// # Errors
    ///
    /// Returns [`MilestoneTrackerError::UnknownTeam`] when the team does not
    /// resolve, and repository variants on persistence failure.
    pub async fn milestones_for_team(
        &self,
        team_id: TeamId,
    ) -> MilestoneTrackerResult<Vec<TeamMilestoneView>> {
        let team = self
            .teams
            .find_team(team_id)
            .await?
            .ok_or(MilestoneTrackerError::UnknownTeam(team_id))?;

        let definitions = self.milestones.list_for_class(team.class_id()).await?;
        let mut views = Vec::with_capacity(definitions.len());
        for milestone in &definitions {
            let status = self.statuses.find(team_id, milestone.id()).await?;
            views.push(TeamMilestoneView::from_parts(milestone, status.as_ref()));
        }
        Ok(views)
    }

    async fn resolve_references(
        &self,
        team_id: TeamId,
        milestone_id: MilestoneId,
    ) -> MilestoneTrackerResult<()> {
        self.teams
            .find_team(team_id)
            .await?
            .ok_or(MilestoneTrackerError::UnknownTeam(team_id))?;
        self.milestones
            .find_by_id(milestone_id)
            .await?
            .ok_or(MilestoneTrackerError::UnknownMilestone(milestone_id))?;
        Ok(())
    }
}
