//! Task aggregate root and the status state machine.

use super::{TaskDomainError, TaskId};
use crate::milestone::domain::MilestoneId;
use crate::roster::domain::{StudentId, TeamId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started. Initial status for every task.
    ToDo,
    /// A member is actively working on the task.
    InProgress,
    /// The task is awaiting review by the team.
    Review,
    /// The task has been accepted as finished.
    Done,
    /// The task has been called off without completion.
    Canceled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
            Self::Canceled => "canceled",
        }
    }

    /// Returns the immutable set of statuses this status may move to.
    ///
    /// The table is the single source of truth for the state machine; no
    /// status ever permits a self-transition, and `Done`/`Canceled` each keep
    /// one reopening edge so mistakes can be corrected without creating a
    /// replacement task.
    #[must_use]
    pub const fn allowed_transitions(self) -> &'static [Self] {
        match self {
            Self::ToDo => &[Self::InProgress, Self::Canceled],
            Self::InProgress => &[Self::Review, Self::ToDo, Self::Canceled],
            Self::Review => &[Self::Done, Self::InProgress, Self::Canceled],
            Self::Done => &[Self::Canceled],
            Self::Canceled => &[Self::ToDo],
        }
    }

    /// Returns whether the state machine permits moving to `target`.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.allowed_transitions().contains(&target)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = super::ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to_do" => Ok(Self::ToDo),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            "canceled" => Ok(Self::Canceled),
            _ => Err(super::ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Individual work item owned by a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    team_id: TeamId,
    milestone_id: Option<MilestoneId>,
    assignee: Option<StudentId>,
    status: TaskStatus,
    due_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in [`TaskStatus::ToDo`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        team_id: TeamId,
        due_at: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: trimmed.to_owned(),
            team_id,
            milestone_id: None,
            assignee: None,
            status: TaskStatus::ToDo,
            due_at,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Ties the task to a class milestone.
    #[must_use]
    pub const fn with_milestone(mut self, milestone_id: MilestoneId) -> Self {
        self.milestone_id = Some(milestone_id);
        self
    }

    /// Assigns the task to a team member.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: StudentId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the owning team.
    #[must_use]
    pub const fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Returns the associated milestone, if any.
    #[must_use]
    pub const fn milestone_id(&self) -> Option<MilestoneId> {
        self.milestone_id
    }

    /// Returns the assigned member, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<StudentId> {
        self.assignee
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due timestamp.
    #[must_use]
    pub const fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to `target`, enforcing the transition table.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the table
    /// does not list `target` for the current status; the task is left
    /// unchanged in that case.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
