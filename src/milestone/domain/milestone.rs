//! Class milestone definitions.

use super::{MilestoneDomainError, MilestoneId};
use crate::roster::domain::ClassId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A class-wide checkpoint with a due date.
///
/// Definitions belong to the class; each team submits its own answer against
/// them through [`super::TeamMilestoneStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    id: MilestoneId,
    class_id: ClassId,
    title: String,
    description: String,
    due_at: DateTime<Utc>,
}

impl Milestone {
    /// Creates a new milestone definition.
    ///
    /// # Errors
    ///
    /// Returns [`MilestoneDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        class_id: ClassId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_at: DateTime<Utc>,
    ) -> Result<Self, MilestoneDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MilestoneDomainError::EmptyTitle);
        }
        Ok(Self {
            id: MilestoneId::new(),
            class_id,
            title: trimmed.to_owned(),
            description: description.into(),
            due_at,
        })
    }

    /// Returns the milestone identifier.
    #[must_use]
    pub const fn id(&self) -> MilestoneId {
        self.id
    }

    /// Returns the owning class.
    #[must_use]
    pub const fn class_id(&self) -> ClassId {
        self.class_id
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
}
