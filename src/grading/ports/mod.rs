//! Port contracts for the scoring engine.

pub mod evaluations;

pub use evaluations::{EvaluationQueries, EvaluationQueryError, EvaluationQueryResult};

#[cfg(test)]
pub use evaluations::MockEvaluationQueries;
