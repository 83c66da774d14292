//! Service orchestration tests for task creation and status changes.

use std::sync::Arc;

use crate::milestone::adapters::memory::InMemoryMilestoneRepository;
use crate::milestone::domain::{Milestone, MilestoneId};
use crate::milestone::ports::MilestoneRepository;
use crate::roster::adapters::memory::InMemoryTeamRepository;
use crate::roster::domain::{ClassId, StudentId, Team, TeamId, TeamMember, TeamRole};
use crate::roster::ports::TeamRepository;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId, TaskStatus},
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService},
};
use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryTeamRepository,
    InMemoryMilestoneRepository,
    DefaultClock,
>;

struct Harness {
    service: TestService,
    teams: Arc<InMemoryTeamRepository>,
    milestones: Arc<InMemoryMilestoneRepository>,
}

#[fixture]
fn harness() -> Harness {
    let teams = Arc::new(InMemoryTeamRepository::new());
    let milestones = Arc::new(InMemoryMilestoneRepository::new());
    let service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&teams),
        Arc::clone(&milestones),
        Arc::new(DefaultClock),
    );
    Harness {
        service,
        teams,
        milestones,
    }
}

async fn enrol_team(harness: &Harness) -> (TeamId, StudentId) {
    let team = Team::new(ClassId::new(), "Operating Systems Group 4").expect("valid team");
    harness
        .teams
        .store_team(&team)
        .await
        .expect("team store should succeed");
    let student = StudentId::new();
    harness
        .teams
        .store_member(&TeamMember::new(team.id(), student, TeamRole::Leader))
        .await
        .expect("member store should succeed");
    (team.id(), student)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_persists_and_is_retrievable(harness: Harness) {
    let (team_id, student) = enrol_team(&harness).await;
    let milestone =
        Milestone::new(ClassId::new(), "Prototype demo", "Show a working slice", Utc::now())
            .expect("valid milestone");
    harness
        .milestones
        .store(&milestone)
        .await
        .expect("milestone store should succeed");

    let request = CreateTaskRequest::new("Wire up login flow", team_id, Utc::now())
        .with_milestone(milestone.id())
        .with_assignee(student);
    let created = harness
        .service
        .create_task(request)
        .await
        .expect("task creation should succeed");

    assert_eq!(created.status(), TaskStatus::ToDo);
    assert_eq!(created.milestone_id(), Some(milestone.id()));
    assert_eq!(created.assignee(), Some(student));

    let fetched = harness
        .service
        .find_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_unknown_team(harness: Harness) {
    let team_id = TeamId::new();
    let request = CreateTaskRequest::new("Orphan task", team_id, Utc::now());
    let result = harness.service.create_task(request).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::UnknownTeam(id)) if id == team_id
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_unknown_milestone(harness: Harness) {
    let (team_id, _) = enrol_team(&harness).await;
    let missing = MilestoneId::new();
    let request =
        CreateTaskRequest::new("Milestone-less task", team_id, Utc::now()).with_milestone(missing);
    let result = harness.service.create_task(request).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::UnknownMilestone(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_assignee_outside_team(harness: Harness) {
    let (team_id, _) = enrol_team(&harness).await;
    let outsider = StudentId::new();
    let request =
        CreateTaskRequest::new("Misassigned task", team_id, Utc::now()).with_assignee(outsider);
    let result = harness.service.create_task(request).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::UnknownAssignee { student_id, .. }) if student_id == outsider
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn change_status_applies_valid_transition(harness: Harness) {
    let (team_id, _) = enrol_team(&harness).await;
    let created = harness
        .service
        .create_task(CreateTaskRequest::new("Set up CI", team_id, Utc::now()))
        .await
        .expect("task creation should succeed");

    let updated = harness
        .service
        .change_status(created.id(), TaskStatus::InProgress)
        .await
        .expect("transition should succeed");
    assert_eq!(updated.status(), TaskStatus::InProgress);

    let stored = harness
        .service
        .find_task(created.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(stored.status(), TaskStatus::InProgress);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn change_status_rejects_invalid_transition_and_keeps_stored_status(harness: Harness) {
    let (team_id, _) = enrol_team(&harness).await;
    let created = harness
        .service
        .create_task(CreateTaskRequest::new("Write report", team_id, Utc::now()))
        .await
        .expect("task creation should succeed");

    let result = harness
        .service
        .change_status(created.id(), TaskStatus::Done)
        .await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidStatusTransition {
                from: TaskStatus::ToDo,
                to: TaskStatus::Done,
                ..
            }
        ))
    ));

    let stored = harness
        .service
        .find_task(created.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(stored.status(), TaskStatus::ToDo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn change_status_fails_for_unknown_task(harness: Harness) {
    let missing = TaskId::new();
    let result = harness
        .service
        .change_status(missing, TaskStatus::InProgress)
        .await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::UnknownTask(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_for_team_returns_creation_order(harness: Harness) {
    let (team_id, _) = enrol_team(&harness).await;
    let first = harness
        .service
        .create_task(CreateTaskRequest::new("First task", team_id, Utc::now()))
        .await
        .expect("task creation should succeed");
    let second = harness
        .service
        .create_task(CreateTaskRequest::new("Second task", team_id, Utc::now()))
        .await
        .expect("task creation should succeed");

    let tasks = harness
        .service
        .tasks_for_team(team_id)
        .await
        .expect("listing should succeed");
    let ids: Vec<_> = tasks.iter().map(crate::task::domain::Task::id).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
}
