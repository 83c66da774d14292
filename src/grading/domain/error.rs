//! Error types for grading domain validation and parsing.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned while constructing grading domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GradingDomainError {
    /// The configured weights do not sum to one.
    #[error("grade weights must sum to 1, got team {team} + peer {peer}")]
    InvalidWeights {
        /// Weight applied to the team milestone average.
        team: Decimal,
        /// Weight applied to the peer review average.
        peer: Decimal,
    },
}

/// Error returned while parsing evaluation kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown evaluation kind: {0}")]
pub struct ParseEvaluationKindError(pub String);
