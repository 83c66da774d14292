//! In-memory evaluation store for scoring tests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

use crate::grading::{
    domain::{Evaluation, EvaluationKind},
    ports::{EvaluationQueries, EvaluationQueryError, EvaluationQueryResult},
};
use crate::roster::domain::{StudentId, TeamId};

/// Thread-safe in-memory evaluation fact store.
///
/// Recording is an inherent method rather than part of the query port:
/// graders append evaluations through collaborating services, the scoring
/// engine only reads averages.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEvaluationStore {
    state: Arc<RwLock<Vec<Evaluation>>>,
}

impl InMemoryEvaluationStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an evaluation fact.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationQueryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn record(&self, evaluation: Evaluation) -> EvaluationQueryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            EvaluationQueryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.push(evaluation);
        Ok(())
    }

    fn average_where(
        &self,
        predicate: impl Fn(&Evaluation) -> bool,
    ) -> EvaluationQueryResult<Option<Decimal>> {
        let state = self.state.read().map_err(|err| {
            EvaluationQueryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut sum = Decimal::ZERO;
        let mut count: u64 = 0;
        for evaluation in state.iter().filter(|evaluation| predicate(evaluation)) {
            sum += evaluation.score();
            count += 1;
        }
        if count == 0 {
            return Ok(None);
        }
        Ok(Some(sum / Decimal::from(count)))
    }
}

#[async_trait]
impl EvaluationQueries for InMemoryEvaluationStore {
    async fn team_average(
        &self,
        team_id: TeamId,
        kind: EvaluationKind,
    ) -> EvaluationQueryResult<Option<Decimal>> {
        self.average_where(|evaluation| {
            evaluation.team_id() == team_id && evaluation.kind() == kind
        })
    }

    async fn student_average(
        &self,
        student_id: StudentId,
        team_id: TeamId,
        kind: EvaluationKind,
    ) -> EvaluationQueryResult<Option<Decimal>> {
        self.average_where(|evaluation| {
            evaluation.team_id() == team_id
                && evaluation.kind() == kind
                && evaluation.student_id() == Some(student_id)
        })
    }
}
