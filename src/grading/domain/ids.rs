//! Identifier newtypes for the grading domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for whoever recorded an evaluation (supervisor or
/// peer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraderId(Uuid);

impl GraderId {
    /// Creates a new random grader identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a grader identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for GraderId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for GraderId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for GraderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
