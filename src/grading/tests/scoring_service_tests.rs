//! Service orchestration tests for the scoring engine.

use std::sync::Arc;

use crate::grading::{
    adapters::memory::InMemoryEvaluationStore,
    domain::{
        ContributionAssessment, ContributionBand, Evaluation, EvaluationKind, GraderId,
        ScoringPolicy,
    },
    services::{ScoringError, ScoringService},
};
use crate::milestone::domain::MilestoneId;
use crate::roster::adapters::memory::InMemoryTeamRepository;
use crate::roster::domain::{StudentId, TeamId, TeamMember, TeamRole};
use crate::roster::ports::TeamRepository;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

type TestService = ScoringService<InMemoryEvaluationStore, InMemoryTeamRepository>;

struct Harness {
    service: TestService,
    evaluations: Arc<InMemoryEvaluationStore>,
    teams: Arc<InMemoryTeamRepository>,
}

#[fixture]
fn harness() -> Harness {
    let evaluations = Arc::new(InMemoryEvaluationStore::new());
    let teams = Arc::new(InMemoryTeamRepository::new());
    let service = ScoringService::new(
        Arc::clone(&evaluations),
        Arc::clone(&teams),
        ScoringPolicy::default(),
    );
    Harness {
        service,
        evaluations,
        teams,
    }
}

fn record_team_scores(harness: &Harness, team_id: TeamId, scores: &[Decimal]) {
    let milestone_id = MilestoneId::new();
    for score in scores {
        harness
            .evaluations
            .record(Evaluation::for_team(
                *score,
                GraderId::new(),
                team_id,
                milestone_id,
                EvaluationKind::TeamMilestone,
            ))
            .expect("record should succeed");
    }
}

fn record_peer_scores(
    harness: &Harness,
    team_id: TeamId,
    student_id: StudentId,
    scores: &[Decimal],
) {
    let milestone_id = MilestoneId::new();
    for score in scores {
        harness
            .evaluations
            .record(Evaluation::for_student(
                *score,
                GraderId::new(),
                student_id,
                team_id,
                milestone_id,
                EvaluationKind::PeerReview,
            ))
            .expect("record should succeed");
    }
}

async fn enrol(harness: &Harness, team_id: TeamId) -> StudentId {
    let student_id = StudentId::new();
    harness
        .teams
        .store_member(&TeamMember::new(team_id, student_id, TeamRole::Member))
        .await
        .expect("member store should succeed");
    student_id
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn preview_without_peer_data_falls_back_to_team_average(harness: Harness) {
    let team_id = TeamId::new();
    let student_id = StudentId::new();
    record_team_scores(&harness, team_id, &[dec!(8.00)]);

    let score = harness
        .service
        .preview_score(student_id, team_id)
        .await
        .expect("preview should succeed");
    assert_eq!(score, dec!(8.00));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn preview_combines_team_and_peer_averages(harness: Harness) {
    let team_id = TeamId::new();
    let student_id = StudentId::new();
    // Averages: team 7.00, peer 9.00 -> 7.00 * 0.6 + 9.00 * 0.4 = 7.80.
    record_team_scores(&harness, team_id, &[dec!(6.50), dec!(7.50)]);
    record_peer_scores(&harness, team_id, student_id, &[dec!(8.50), dec!(9.50)]);

    let score = harness
        .service
        .preview_score(student_id, team_id)
        .await
        .expect("preview should succeed");
    assert_eq!(score, dec!(7.80));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn preview_with_no_evaluations_at_all_is_zero(harness: Harness) {
    let score = harness
        .service
        .preview_score(StudentId::new(), TeamId::new())
        .await
        .expect("preview should succeed");
    assert_eq!(score, Decimal::ZERO);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn preview_rounds_half_up_at_the_boundary(harness: Harness) {
    let team_id = TeamId::new();
    // Average of 7.00 and 7.01 is 7.005; external rounding gives 7.01.
    record_team_scores(&harness, team_id, &[dec!(7.00), dec!(7.01)]);

    let score = harness
        .service
        .preview_score(StudentId::new(), team_id)
        .await
        .expect("preview should succeed");
    assert_eq!(score, dec!(7.01));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finalize_persists_exactly_the_preview_value(harness: Harness) {
    let team_id = TeamId::new();
    let student_id = enrol(&harness, team_id).await;
    record_team_scores(&harness, team_id, &[dec!(6.50), dec!(7.50)]);
    record_peer_scores(&harness, team_id, student_id, &[dec!(9.00)]);

    let preview = harness
        .service
        .preview_score(student_id, team_id)
        .await
        .expect("preview should succeed");
    let finalized = harness
        .service
        .finalize_score(student_id, team_id)
        .await
        .expect("finalize should succeed");
    assert_eq!(finalized, preview);

    let stored = harness
        .service
        .finalized_score(student_id, team_id)
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, Some(preview));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finalize_twice_recomputes_from_current_data(harness: Harness) {
    let team_id = TeamId::new();
    let student_id = enrol(&harness, team_id).await;
    record_team_scores(&harness, team_id, &[dec!(6.00)]);

    let first = harness
        .service
        .finalize_score(student_id, team_id)
        .await
        .expect("first finalize should succeed");
    assert_eq!(first, dec!(6.00));

    // New supervisor evaluation arrives; refinalizing overwrites.
    record_team_scores(&harness, team_id, &[dec!(8.00)]);
    let second = harness
        .service
        .finalize_score(student_id, team_id)
        .await
        .expect("second finalize should succeed");
    assert_eq!(second, dec!(7.00));

    let stored = harness
        .service
        .finalized_score(student_id, team_id)
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, Some(dec!(7.00)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finalize_rejects_non_member(harness: Harness) {
    let team_id = TeamId::new();
    let outsider = StudentId::new();
    record_team_scores(&harness, team_id, &[dec!(7.00)]);

    let result = harness.service.finalize_score(outsider, team_id).await;
    assert!(matches!(
        result,
        Err(ScoringError::UnknownMember { student_id, .. }) if student_id == outsider
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finalized_score_is_none_before_finalization(harness: Harness) {
    let team_id = TeamId::new();
    let student_id = enrol(&harness, team_id).await;

    let stored = harness
        .service
        .finalized_score(student_id, team_id)
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn contribution_analysis_classifies_against_team_average(harness: Harness) {
    let team_id = TeamId::new();
    let student_id = StudentId::new();
    let teammate = StudentId::new();
    // Student peer average 5.00; teammate 9.00; team-wide 7.00.
    record_peer_scores(&harness, team_id, student_id, &[dec!(5.00)]);
    record_peer_scores(&harness, team_id, teammate, &[dec!(9.00)]);

    let assessment = harness
        .service
        .analyze_contribution(student_id, team_id)
        .await
        .expect("analysis should succeed");
    let ContributionAssessment::Assessed(report) = assessment else {
        panic!("expected an assessed report, got {assessment:?}");
    };
    assert_eq!(report.band, ContributionBand::Warning);
    assert_eq!(report.student_average, dec!(5.00));
    assert_eq!(report.team_average, dec!(7.00));
    assert_eq!(report.difference, dec!(-2.00));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn contribution_analysis_reports_missing_data_statuses(harness: Harness) {
    let team_id = TeamId::new();
    let student_id = StudentId::new();

    // No peer reviews anywhere in the team.
    let assessment = harness
        .service
        .analyze_contribution(student_id, team_id)
        .await
        .expect("analysis should succeed");
    assert_eq!(assessment, ContributionAssessment::NoStudentData);

    // A teammate has peer data but the student still has none.
    record_peer_scores(&harness, team_id, StudentId::new(), &[dec!(8.00)]);
    let with_teammate_data = harness
        .service
        .analyze_contribution(student_id, team_id)
        .await
        .expect("analysis should succeed");
    assert_eq!(with_teammate_data, ContributionAssessment::NoStudentData);
}
