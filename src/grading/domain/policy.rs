//! Scoring policy values injected into the scoring engine.

use super::GradingDomainError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Relative weights of the team milestone average and the peer review
/// average in a final grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeWeights {
    team: Decimal,
    peer: Decimal,
}

impl GradeWeights {
    /// Creates validated weights.
    ///
    /// # Errors
    ///
    /// Returns [`GradingDomainError::InvalidWeights`] when the weights do not
    /// sum to exactly one.
    pub fn new(team: Decimal, peer: Decimal) -> Result<Self, GradingDomainError> {
        if team + peer != Decimal::ONE {
            return Err(GradingDomainError::InvalidWeights { team, peer });
        }
        Ok(Self { team, peer })
    }

    /// Returns the weight applied to the team milestone average.
    #[must_use]
    pub const fn team(self) -> Decimal {
        self.team
    }

    /// Returns the weight applied to the peer review average.
    #[must_use]
    pub const fn peer(self) -> Decimal {
        self.peer
    }
}

impl Default for GradeWeights {
    /// The standard 60/40 split between supervisor and peer assessment.
    fn default() -> Self {
        Self {
            team: dec!(0.60),
            peer: dec!(0.40),
        }
    }
}

/// Deviation cut-offs for contribution analysis.
///
/// The difference is the student's peer average minus the team-wide peer
/// average; below `warning_below` flags an under-contributor, above
/// `excellent_above` an over-contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionThresholds {
    /// Differences strictly below this value are flagged as warnings.
    pub warning_below: Decimal,
    /// Differences strictly above this value are flagged as excellent.
    pub excellent_above: Decimal,
}

impl Default for ContributionThresholds {
    fn default() -> Self {
        Self {
            warning_below: dec!(-1.5),
            excellent_above: dec!(1.0),
        }
    }
}

/// Complete policy bundle for one scoring engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Weighting of team vs peer averages.
    pub weights: GradeWeights,
    /// Contribution deviation cut-offs.
    pub thresholds: ContributionThresholds,
}

impl ScoringPolicy {
    /// Creates a policy from its parts.
    #[must_use]
    pub const fn new(weights: GradeWeights, thresholds: ContributionThresholds) -> Self {
        Self {
            weights,
            thresholds,
        }
    }
}
