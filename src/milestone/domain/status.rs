//! Per-team milestone submission state.

use super::{MilestoneDomainError, MilestoneId};
use crate::roster::domain::TeamId;
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A team's submission against one class milestone.
///
/// At most one record exists per (team, milestone) pair. Before completion
/// the answer and completed-task set may be overwritten freely; once
/// [`TeamMilestoneStatus::mark_complete`] runs, both are frozen and only
/// supervisor feedback remains writable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMilestoneStatus {
    team_id: TeamId,
    milestone_id: MilestoneId,
    answer: String,
    completed_task_ids: Vec<TaskId>,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    feedback: Option<String>,
}

impl TeamMilestoneStatus {
    /// Creates an empty, unlocked status record for a (team, milestone) pair.
    #[must_use]
    pub const fn new(team_id: TeamId, milestone_id: MilestoneId) -> Self {
        Self {
            team_id,
            milestone_id,
            answer: String::new(),
            completed_task_ids: Vec::new(),
            completed: false,
            completed_at: None,
            feedback: None,
        }
    }

    /// Returns the team side of the composite key.
    #[must_use]
    pub const fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Returns the milestone side of the composite key.
    #[must_use]
    pub const fn milestone_id(&self) -> MilestoneId {
        self.milestone_id
    }

    /// Returns the team's narrative answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the tasks the team marked as done for this milestone.
    #[must_use]
    pub fn completed_task_ids(&self) -> &[TaskId] {
        &self.completed_task_ids
    }

    /// Returns whether the milestone has been marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the supervisor feedback, if any has been recorded.
    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Overwrites the answer and completed-task set.
    ///
    /// Repeated calls before completion simply overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`MilestoneDomainError::Locked`] once the milestone has been
    /// marked complete; the stored answer and task set are left unchanged.
    pub fn record_answer(
        &mut self,
        answer: impl Into<String>,
        completed_task_ids: Vec<TaskId>,
    ) -> Result<(), MilestoneDomainError> {
        if self.completed {
            return Err(MilestoneDomainError::Locked {
                team_id: self.team_id,
                milestone_id: self.milestone_id,
            });
        }
        self.answer = answer.into();
        self.completed_task_ids = completed_task_ids;
        Ok(())
    }

    /// Marks the milestone complete and stamps the completion time.
    ///
    /// One-way: a second call is a no-op that keeps the original timestamp.
    pub fn mark_complete(&mut self, clock: &impl Clock) {
        if self.completed {
            return;
        }
        self.completed = true;
        self.completed_at = Some(clock.utc());
    }

    /// Records supervisor feedback.
    ///
    /// The feedback channel stays open after completion.
    pub fn record_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = Some(feedback.into());
    }
}
