//! Domain model for grade derivation.

mod error;
mod evaluation;
mod ids;
mod policy;
mod score;

pub use error::{GradingDomainError, ParseEvaluationKindError};
pub use evaluation::{Evaluation, EvaluationKind};
pub use ids::GraderId;
pub use policy::{ContributionThresholds, GradeWeights, ScoringPolicy};
pub use score::{
    ContributionAssessment, ContributionBand, ContributionReport, GRADE_SCALE, assess_contribution,
    round_grade, weighted_preview,
};
