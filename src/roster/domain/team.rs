//! Team and membership aggregates.

use super::{ClassId, RosterDomainError, StudentId, TeamId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A group of students collaborating on one project within one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    class_id: ClassId,
    name: String,
}

impl Team {
    /// Creates a new team with a validated display name.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyTeamName`] when the name is empty
    /// after trimming.
    pub fn new(class_id: ClassId, name: impl Into<String>) -> Result<Self, RosterDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RosterDomainError::EmptyTeamName);
        }
        Ok(Self {
            id: TeamId::new(),
            class_id,
            name: trimmed.to_owned(),
        })
    }

    /// Returns the team identifier.
    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the class this team belongs to.
    #[must_use]
    pub const fn class_id(&self) -> ClassId {
        self.class_id
    }

    /// Returns the team display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Role a student holds within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    /// The single member coordinating the team.
    Leader,
    /// A regular team member.
    Member,
}

impl TeamRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leader => "leader",
            Self::Member => "member",
        }
    }
}

impl TryFrom<&str> for TeamRole {
    type Error = super::ParseTeamRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "leader" => Ok(Self::Leader),
            "member" => Ok(Self::Member),
            _ => Err(super::ParseTeamRoleError(value.to_owned())),
        }
    }
}

/// Membership row linking a student to a team.
///
/// `final_grade` stays `None` until the scoring engine finalizes a grade for
/// the pair; once written it is the authoritative displayed grade and is only
/// overwritten by a subsequent finalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    team_id: TeamId,
    student_id: StudentId,
    role: TeamRole,
    final_grade: Option<Decimal>,
}

impl TeamMember {
    /// Creates a membership row with no grade recorded.
    #[must_use]
    pub const fn new(team_id: TeamId, student_id: StudentId, role: TeamRole) -> Self {
        Self {
            team_id,
            student_id,
            role,
            final_grade: None,
        }
    }

    /// Returns the team identifier.
    #[must_use]
    pub const fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Returns the student identifier.
    #[must_use]
    pub const fn student_id(&self) -> StudentId {
        self.student_id
    }

    /// Returns the member's role.
    #[must_use]
    pub const fn role(&self) -> TeamRole {
        self.role
    }

    /// Returns the finalized grade, or `None` when never finalized.
    #[must_use]
    pub const fn final_grade(&self) -> Option<Decimal> {
        self.final_grade
    }

    /// Records a finalized grade, overwriting any previous value.
    pub const fn set_final_grade(&mut self, grade: Decimal) {
        self.final_grade = Some(grade);
    }
}
