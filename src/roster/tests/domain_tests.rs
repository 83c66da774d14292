//! Domain-focused tests for team and membership types.

use crate::roster::domain::{
    ClassId, RosterDomainError, StudentId, Team, TeamId, TeamMember, TeamRole,
};
use rstest::rstest;
use rust_decimal_macros::dec;

#[rstest]
fn team_new_trims_and_keeps_name() {
    let team = Team::new(ClassId::new(), "  Compilers Group 3  ").expect("valid team");
    assert_eq!(team.name(), "Compilers Group 3");
}

#[rstest]
#[case("")]
#[case("   ")]
fn team_new_rejects_empty_name(#[case] name: &str) {
    let result = Team::new(ClassId::new(), name);
    assert_eq!(result, Err(RosterDomainError::EmptyTeamName));
}

#[rstest]
#[case("leader", TeamRole::Leader)]
#[case("  MEMBER ", TeamRole::Member)]
fn team_role_parses_canonical_forms(#[case] raw: &str, #[case] expected: TeamRole) {
    assert_eq!(TeamRole::try_from(raw), Ok(expected));
}

#[rstest]
fn team_role_rejects_unknown_value() {
    assert!(TeamRole::try_from("observer").is_err());
}

#[rstest]
fn member_starts_without_final_grade_and_records_one() {
    let mut member = TeamMember::new(TeamId::new(), StudentId::new(), TeamRole::Member);
    assert_eq!(member.final_grade(), None);

    member.set_final_grade(dec!(7.80));
    assert_eq!(member.final_grade(), Some(dec!(7.80)));

    // A later finalization overwrites, never accumulates.
    member.set_final_grade(dec!(8.10));
    assert_eq!(member.final_grade(), Some(dec!(8.10)));
}
