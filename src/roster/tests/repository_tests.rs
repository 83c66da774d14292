//! In-memory repository tests for roster storage.

use crate::roster::{
    adapters::memory::InMemoryTeamRepository,
    domain::{ClassId, StudentId, Team, TeamId, TeamMember, TeamRole},
    ports::{TeamRepository, TeamRepositoryError},
};
use rstest::{fixture, rstest};
use rust_decimal_macros::dec;

#[fixture]
fn repo() -> InMemoryTeamRepository {
    InMemoryTeamRepository::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_and_find_team_round_trip(repo: InMemoryTeamRepository) {
    let team = Team::new(ClassId::new(), "Databases Group 1").expect("valid team");
    repo.store_team(&team).await.expect("store should succeed");

    let fetched = repo.find_team(team.id()).await.expect("lookup should succeed");
    assert_eq!(fetched, Some(team));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_team_rejects_duplicate_identifier(repo: InMemoryTeamRepository) {
    let team = Team::new(ClassId::new(), "Networks Group 2").expect("valid team");
    repo.store_team(&team).await.expect("first store should succeed");

    let result = repo.store_team(&team).await;
    assert!(matches!(
        result,
        Err(TeamRepositoryError::DuplicateTeam(id)) if id == team.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_members_preserves_enrolment_order(repo: InMemoryTeamRepository) {
    let team_id = TeamId::new();
    let leader = TeamMember::new(team_id, StudentId::new(), TeamRole::Leader);
    let second = TeamMember::new(team_id, StudentId::new(), TeamRole::Member);
    let third = TeamMember::new(team_id, StudentId::new(), TeamRole::Member);

    for member in [&leader, &second, &third] {
        repo.store_member(member).await.expect("store should succeed");
    }

    let members = repo.list_members(team_id).await.expect("list should succeed");
    let students: Vec<_> = members.iter().map(TeamMember::student_id).collect();
    assert_eq!(
        students,
        vec![leader.student_id(), second.student_id(), third.student_id()]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_member_persists_final_grade(repo: InMemoryTeamRepository) {
    let mut member = TeamMember::new(TeamId::new(), StudentId::new(), TeamRole::Member);
    repo.store_member(&member).await.expect("store should succeed");

    member.set_final_grade(dec!(9.25));
    repo.update_member(&member).await.expect("update should succeed");

    let fetched = repo
        .find_member(member.team_id(), member.student_id())
        .await
        .expect("lookup should succeed")
        .expect("member should exist");
    assert_eq!(fetched.final_grade(), Some(dec!(9.25)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_member_fails_for_unknown_pair(repo: InMemoryTeamRepository) {
    let member = TeamMember::new(TeamId::new(), StudentId::new(), TeamRole::Member);
    let result = repo.update_member(&member).await;
    assert!(matches!(
        result,
        Err(TeamRepositoryError::MemberNotFound { .. })
    ));
}
