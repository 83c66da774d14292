//! Service layer for task creation and status transitions.

use crate::milestone::domain::MilestoneId;
use crate::milestone::ports::{MilestoneRepository, MilestoneRepositoryError};
use crate::roster::domain::{StudentId, TeamId};
use crate::roster::ports::{TeamRepository, TeamRepositoryError};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    team_id: TeamId,
    due_at: DateTime<Utc>,
    milestone_id: Option<MilestoneId>,
    assignee: Option<StudentId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, team_id: TeamId, due_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            team_id,
            due_at,
            milestone_id: None,
            assignee: None,
        }
    }

    /// Ties the new task to a class milestone.
    #[must_use]
    pub const fn with_milestone(mut self, milestone_id: MilestoneId) -> Self {
        self.milestone_id = Some(milestone_id);
        self
    }

    /// Assigns the new task to a team member.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: StudentId) -> Self {
        self.assignee = Some(assignee);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Roster repository operation failed.
    #[error(transparent)]
    Roster(#[from] TeamRepositoryError),

    /// Milestone repository operation failed.
    #[error(transparent)]
    Milestones(#[from] MilestoneRepositoryError),

    /// The referenced team does not exist.
    #[error("team not found: {0}")]
    UnknownTeam(TeamId),

    /// The referenced milestone does not exist.
    #[error("milestone not found: {0}")]
    UnknownMilestone(MilestoneId),

    /// The requested assignee is not a member of the owning team.
    #[error("student {student_id} is not a member of team {team_id}")]
    UnknownAssignee {
        /// Team the task belongs to.
        team_id: TeamId,
        /// Student requested as assignee.
        student_id: StudentId,
    },

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    UnknownTask(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Creation validates every reference against the roster and milestone
/// ports; status changes go through the domain state machine. Notification
/// dispatch after a successful transition is the caller's responsibility.
#[derive(Clone)]
pub struct TaskLifecycleService<R, T, M, C>
where
    R: TaskRepository,
    T: TeamRepository,
    M: MilestoneRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    teams: Arc<T>,
    milestones: Arc<M>,
    clock: Arc<C>,
}

impl<R, T, M, C> TaskLifecycleService<R, T, M, C>
where
    R: TaskRepository,
    T: TeamRepository,
    M: MilestoneRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, teams: Arc<T>, milestones: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            teams,
            milestones,
            clock,
        }
    }

    /// Creates a new task in [`TaskStatus::ToDo`] and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownTeam`],
    /// [`TaskLifecycleError::UnknownMilestone`], or
    /// [`TaskLifecycleError::UnknownAssignee`] when a reference does not
    /// resolve, [`TaskLifecycleError::Domain`] when validation fails, and
    /// repository variants when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        self.teams
            .find_team(request.team_id)
            .await?
            .ok_or(TaskLifecycleError::UnknownTeam(request.team_id))?;

        if let Some(milestone_id) = request.milestone_id {
            self.milestones
                .find_by_id(milestone_id)
                .await?
                .ok_or(TaskLifecycleError::UnknownMilestone(milestone_id))?;
        }

        if let Some(assignee) = request.assignee {
            self.teams
                .find_member(request.team_id, assignee)
                .await?
                .ok_or(TaskLifecycleError::UnknownAssignee {
                    team_id: request.team_id,
                    student_id: assignee,
                })?;
        }

        let mut task = Task::new(
            request.title,
            request.team_id,
            request.due_at,
            &*self.clock,
        )?;
        if let Some(milestone_id) = request.milestone_id {
            task = task.with_milestone(milestone_id);
        }
        if let Some(assignee) = request.assignee {
            task = task.with_assignee(assignee);
        }

        self.tasks.store(&task).await?;
        Ok(task)
    }

    /// Moves a task to `target` when the transition table permits it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownTask`] when the task does not
    /// exist and [`TaskLifecycleError::Domain`] wrapping
    /// [`TaskDomainError::InvalidStatusTransition`] when the move is
    /// forbidden; the stored status is unchanged in both cases.
    pub async fn change_status(
        &self,
        task_id: TaskId,
        target: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::UnknownTask(task_id))?;

        task.transition_to(target, &*self.clock)?;
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_task(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.tasks.find_by_id(task_id).await?)
    }

    /// Returns all tasks owned by a team in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn tasks_for_team(&self, team_id: TeamId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.find_by_team(team_id).await?)
    }
}
