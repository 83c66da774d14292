//! Scoring engine: preview, finalize, and contribution analysis.

use crate::grading::{
    domain::{
        ContributionAssessment, EvaluationKind, ScoringPolicy, assess_contribution,
        weighted_preview,
    },
    ports::{EvaluationQueries, EvaluationQueryError},
};
use crate::roster::domain::{StudentId, TeamId};
use crate::roster::ports::{TeamRepository, TeamRepositoryError};
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for scoring operations.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Evaluation aggregate query failed.
    #[error(transparent)]
    Evaluations(#[from] EvaluationQueryError),

    /// Roster repository operation failed.
    #[error(transparent)]
    Roster(#[from] TeamRepositoryError),

    /// The student is not a member of the team being scored.
    #[error("student {student_id} is not a member of team {team_id}")]
    UnknownMember {
        /// Team the grade was requested for.
        team_id: TeamId,
        /// Student the grade was requested for.
        student_id: StudentId,
    },
}

/// Result type for scoring operations.
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Grade derivation service.
///
/// Weights and thresholds come in through [`ScoringPolicy`] at construction
/// so alternate policies can be exercised without recompilation. Every
/// returned grade is a scale-2 decimal rounded half-up at the boundary.
#[derive(Clone)]
pub struct ScoringService<E, T>
where
    E: EvaluationQueries,
    T: TeamRepository,
{
    evaluations: Arc<E>,
    teams: Arc<T>,
    policy: ScoringPolicy,
}

impl<E, T> ScoringService<E, T>
where
    E: EvaluationQueries,
    T: TeamRepository,
{
    /// Creates a new scoring service with the given policy.
    #[must_use]
    pub const fn new(evaluations: Arc<E>, teams: Arc<T>, policy: ScoringPolicy) -> Self {
        Self {
            evaluations,
            teams,
            policy,
        }
    }

    /// Returns the policy this engine was constructed with.
    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Computes the weighted grade a finalization would store right now.
    ///
    /// Reads the team milestone average and the student's peer review
    /// average; a missing peer average degrades gracefully to 100%
    /// team-based scoring. Persists nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Evaluations`] when an aggregate query fails.
    pub async fn preview_score(
        &self,
        student_id: StudentId,
        team_id: TeamId,
    ) -> ScoringResult<Decimal> {
        let team_average = self
            .evaluations
            .team_average(team_id, EvaluationKind::TeamMilestone)
            .await?
            .unwrap_or(Decimal::ZERO);
        let peer_average = self
            .evaluations
            .student_average(student_id, team_id, EvaluationKind::PeerReview)
            .await?
            .unwrap_or(Decimal::ZERO);

        Ok(weighted_preview(team_average, peer_average, self.policy.weights))
    }

    /// Computes the preview score and stores it as the student's final grade.
    ///
    /// Repeat calls recompute from current evaluation data and overwrite;
    /// the operation is not additive and carries no concurrency guard.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::UnknownMember`] when the student is not a
    /// member of the team, and query/repository variants on storage failure.
    pub async fn finalize_score(
        &self,
        student_id: StudentId,
        team_id: TeamId,
    ) -> ScoringResult<Decimal> {
        let score = self.preview_score(student_id, team_id).await?;

        let mut member = self
            .teams
            .find_member(team_id, student_id)
            .await?
            .ok_or(ScoringError::UnknownMember {
                team_id,
                student_id,
            })?;
        member.set_final_grade(score);
        self.teams.update_member(&member).await?;
        Ok(score)
    }

    /// Returns the stored final grade, or `None` when never finalized.
    ///
    /// A finalized grade of exactly zero is distinct from the
    /// never-finalized sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::UnknownMember`] when the student is not a
    /// member of the team.
    pub async fn finalized_score(
        &self,
        student_id: StudentId,
        team_id: TeamId,
    ) -> ScoringResult<Option<Decimal>> {
        let member = self
            .teams
            .find_member(team_id, student_id)
            .await?
            .ok_or(ScoringError::UnknownMember {
                team_id,
                student_id,
            })?;
        Ok(member.final_grade())
    }

    /// Compares the student's peer review average against the team-wide
    /// peer review average and classifies the deviation.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Evaluations`] when an aggregate query fails.
    pub async fn analyze_contribution(
        &self,
        student_id: StudentId,
        team_id: TeamId,
    ) -> ScoringResult<ContributionAssessment> {
        let student_average = self
            .evaluations
            .student_average(student_id, team_id, EvaluationKind::PeerReview)
            .await?;
        let team_average = self
            .evaluations
            .team_average(team_id, EvaluationKind::PeerReview)
            .await?;

        Ok(assess_contribution(
            student_average,
            team_average,
            self.policy.thresholds,
        ))
    }
}
