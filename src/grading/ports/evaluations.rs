//! Read-only aggregate queries over recorded evaluations.
//!
//! Evaluation recording is owned by collaborating services; the scoring
//! engine only reads averages, filtered strictly by kind so the reserved
//! `individual_task` kind can never leak into a grade.

use crate::grading::domain::EvaluationKind;
use crate::roster::domain::{StudentId, TeamId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

/// Result type for evaluation query operations.
pub type EvaluationQueryResult<T> = Result<T, EvaluationQueryError>;

/// Aggregate query contract over evaluation facts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvaluationQueries: Send + Sync {
    /// Returns the average score of all evaluations of `kind` recorded for
    /// the team, regardless of student.
    ///
    /// Returns `None` when no matching evaluations exist.
    async fn team_average(
        &self,
        team_id: TeamId,
        kind: EvaluationKind,
    ) -> EvaluationQueryResult<Option<Decimal>>;

    /// Returns the average score of all evaluations of `kind` recorded for
    /// one student within one team.
    ///
    /// Returns `None` when no matching evaluations exist.
    async fn student_average(
        &self,
        student_id: StudentId,
        team_id: TeamId,
        kind: EvaluationKind,
    ) -> EvaluationQueryResult<Option<Decimal>>;
}

/// Errors returned by evaluation query implementations.
#[derive(Debug, Clone, Error)]
pub enum EvaluationQueryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EvaluationQueryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
