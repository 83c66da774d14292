//! Evaluation facts consumed by the scoring engine.

use super::GraderId;
use crate::milestone::domain::MilestoneId;
use crate::roster::domain::{StudentId, TeamId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What an evaluation score applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
    /// A supervisor grades the team as a unit for a milestone.
    TeamMilestone,
    /// A peer grades an individual teammate.
    PeerReview,
    /// A grade for one specific task. Reserved: present in the data model
    /// but consumed by no scoring formula.
    IndividualTask,
}

impl EvaluationKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TeamMilestone => "team_milestone",
            Self::PeerReview => "peer_review",
            Self::IndividualTask => "individual_task",
        }
    }
}

impl TryFrom<&str> for EvaluationKind {
    type Error = super::ParseEvaluationKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "team_milestone" => Ok(Self::TeamMilestone),
            "peer_review" => Ok(Self::PeerReview),
            "individual_task" => Ok(Self::IndividualTask),
            _ => Err(super::ParseEvaluationKindError(value.to_owned())),
        }
    }
}

/// An immutable recorded score.
///
/// Evaluations are appended by graders outside this crate; the scoring
/// engine only reads aggregates over them. A missing student reference means
/// the score applies to the whole team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    score: Decimal,
    grader_id: GraderId,
    student_id: Option<StudentId>,
    team_id: TeamId,
    milestone_id: MilestoneId,
    kind: EvaluationKind,
}

impl Evaluation {
    /// Creates a team-level evaluation (no individual student).
    #[must_use]
    pub const fn for_team(
        score: Decimal,
        grader_id: GraderId,
        team_id: TeamId,
        milestone_id: MilestoneId,
        kind: EvaluationKind,
    ) -> Self {
        Self {
            score,
            grader_id,
            student_id: None,
            team_id,
            milestone_id,
            kind,
        }
    }

    /// Creates an evaluation targeting an individual student.
    #[must_use]
    pub const fn for_student(
        score: Decimal,
        grader_id: GraderId,
        student_id: StudentId,
        team_id: TeamId,
        milestone_id: MilestoneId,
        kind: EvaluationKind,
    ) -> Self {
        Self {
            score,
            grader_id,
            student_id: Some(student_id),
            team_id,
            milestone_id,
            kind,
        }
    }

    /// Returns the recorded score.
    #[must_use]
    pub const fn score(&self) -> Decimal {
        self.score
    }

    /// Returns who recorded the score.
    #[must_use]
    pub const fn grader_id(&self) -> GraderId {
        self.grader_id
    }

    /// Returns the graded student, or `None` for a whole-team score.
    #[must_use]
    pub const fn student_id(&self) -> Option<StudentId> {
        self.student_id
    }

    /// Returns the team the score belongs to.
    #[must_use]
    pub const fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Returns the milestone the score was recorded against.
    #[must_use]
    pub const fn milestone_id(&self) -> MilestoneId {
        self.milestone_id
    }

    /// Returns the evaluation kind.
    #[must_use]
    pub const fn kind(&self) -> EvaluationKind {
        self.kind
    }
}
