//! Pure scoring arithmetic.
//!
//! All grade values are fixed-point decimals. Rounding (scale 2, half-up)
//! happens only when a value becomes externally visible, never between
//! intermediate steps.

use super::{ContributionThresholds, GradeWeights};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits in every externalized grade.
pub const GRADE_SCALE: u32 = 2;

/// Rounds a grade value to the external scale, half-up.
#[must_use]
pub fn round_grade(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(GRADE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Combines the team milestone average and the peer review average into a
/// preview grade.
///
/// A zero peer average means no usable peer data; the grade then degrades
/// gracefully to the team average alone instead of dragging the result down.
#[must_use]
pub fn weighted_preview(team_average: Decimal, peer_average: Decimal, weights: GradeWeights) -> Decimal {
    if peer_average.is_zero() {
        return round_grade(team_average);
    }
    round_grade(team_average * weights.team() + peer_average * weights.peer())
}

/// Classification band for a student's contribution deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionBand {
    /// Peer-assessed contribution is well below the team average.
    Warning,
    /// Peer-assessed contribution sits near the team average.
    Normal,
    /// Peer-assessed contribution is well above the team average.
    Excellent,
}

/// Contribution deviation figures for one student within one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionReport {
    /// The student's peer review average, externally rounded.
    pub student_average: Decimal,
    /// The team-wide peer review average, externally rounded.
    pub team_average: Decimal,
    /// Student average minus team average, externally rounded.
    pub difference: Decimal,
    /// Band the difference falls into.
    pub band: ContributionBand,
}

/// Outcome of contribution analysis for a (student, team) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContributionAssessment {
    /// The student has no peer review data in this team.
    NoStudentData,
    /// The team has no peer review data at all.
    InsufficientTeamData,
    /// Both averages exist; the deviation has been classified.
    Assessed(ContributionReport),
}

/// Classifies a student's peer average against the team-wide peer average.
///
/// A zero average carries no information (the score scale starts above
/// zero), so zero folds into the missing-data statuses exactly like an
/// absent aggregate. Classification compares the exact difference against
/// the thresholds; the report carries rounded values.
#[must_use]
pub fn assess_contribution(
    student_average: Option<Decimal>,
    team_average: Option<Decimal>,
    thresholds: ContributionThresholds,
) -> ContributionAssessment {
    let Some(student) = student_average.filter(|average| !average.is_zero()) else {
        return ContributionAssessment::NoStudentData;
    };
    let Some(team) = team_average.filter(|average| !average.is_zero()) else {
        return ContributionAssessment::InsufficientTeamData;
    };

    let difference = student - team;
    let band = if difference < thresholds.warning_below {
        ContributionBand::Warning
    } else if difference > thresholds.excellent_above {
        ContributionBand::Excellent
    } else {
        ContributionBand::Normal
    };

    ContributionAssessment::Assessed(ContributionReport {
        student_average: round_grade(student),
        team_average: round_grade(team),
        difference: round_grade(difference),
        band,
    })
}
