//! Merged milestone definition + team status view.

use super::{Milestone, MilestoneId, TeamMilestoneStatus};
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One milestone as seen by one team: the class definition merged with the
/// team's status record, defaulting to an empty, incomplete submission when
/// no record exists yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMilestoneView {
    milestone_id: MilestoneId,
    title: String,
    description: String,
    due_at: DateTime<Utc>,
    answer: String,
    completed_task_ids: Vec<TaskId>,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    feedback: Option<String>,
}

impl TeamMilestoneView {
    /// Merges a definition with a team's status record, if one exists.
    #[must_use]
    pub fn from_parts(milestone: &Milestone, status: Option<&TeamMilestoneStatus>) -> Self {
        let (answer, completed_task_ids, completed, completed_at, feedback) =
            status.map_or_else(
                || (String::new(), Vec::new(), false, None, None),
                |record| {
                    (
                        record.answer().to_owned(),
                        record.completed_task_ids().to_vec(),
                        record.is_completed(),
                        record.completed_at(),
                        record.feedback().map(str::to_owned),
                    )
                },
            );
        Self {
            milestone_id: milestone.id(),
            title: milestone.title().to_owned(),
            description: milestone.description().to_owned(),
            due_at: milestone.due_at(),
            answer,
            completed_task_ids,
            completed,
            completed_at,
            feedback,
        }
    }

    /// Returns the milestone identifier.
    #[must_use]
    pub const fn milestone_id(&self) -> MilestoneId {
        self.milestone_id
    }

    /// Returns the milestone title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the milestone description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due timestamp.
    #[must_use]
    pub const fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// Returns the team's answer, empty when nothing has been submitted.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the tasks the team marked as done.
    #[must_use]
    pub fn completed_task_ids(&self) -> &[TaskId] {
        &self.completed_task_ids
    }

    /// Returns whether the team has completed the milestone.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the supervisor feedback, if any.
    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}
