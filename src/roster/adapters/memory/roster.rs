//! In-memory repository for team and membership tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::roster::{
    domain::{StudentId, Team, TeamId, TeamMember},
    ports::{TeamRepository, TeamRepositoryError, TeamRepositoryResult},
};

/// Thread-safe in-memory team repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    state: Arc<RwLock<InMemoryRosterState>>,
}

#[derive(Debug, Default)]
struct InMemoryRosterState {
    teams: HashMap<TeamId, Team>,
    members: HashMap<(TeamId, StudentId), TeamMember>,
    // Enrolment order per team, so list_members is deterministic.
    enrolment: HashMap<TeamId, Vec<StudentId>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn store_team(&self, team: &Team) -> TeamRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TeamRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.teams.contains_key(&team.id()) {
            return Err(TeamRepositoryError::DuplicateTeam(team.id()));
        }
        state.teams.insert(team.id(), team.clone());
        Ok(())
    }

    async fn find_team(&self, id: TeamId) -> TeamRepositoryResult<Option<Team>> {
        let state = self.state.read().map_err(|err| {
            TeamRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.teams.get(&id).cloned())
    }

    async fn store_member(&self, member: &TeamMember) -> TeamRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TeamRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let key = (member.team_id(), member.student_id());
        if state.members.contains_key(&key) {
            return Err(TeamRepositoryError::DuplicateMember {
                team_id: member.team_id(),
                student_id: member.student_id(),
            });
        }
        state
            .enrolment
            .entry(member.team_id())
            .or_default()
            .push(member.student_id());
        state.members.insert(key, member.clone());
        Ok(())
    }

    async fn find_member(
        &self,
        team_id: TeamId,
        student_id: StudentId,
    ) -> TeamRepositoryResult<Option<TeamMember>> {
        let state = self.state.read().map_err(|err| {
            TeamRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.members.get(&(team_id, student_id)).cloned())
    }

    async fn list_members(&self, team_id: TeamId) -> TeamRepositoryResult<Vec<TeamMember>> {
        let state = self.state.read().map_err(|err| {
            TeamRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let members = state
            .enrolment
            .get(&team_id)
            .map(|students| {
                students
                    .iter()
                    .filter_map(|student_id| state.members.get(&(team_id, *student_id)).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(members)
    }

    async fn update_member(&self, member: &TeamMember) -> TeamRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TeamRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let key = (member.team_id(), member.student_id());
        if !state.members.contains_key(&key) {
            return Err(TeamRepositoryError::MemberNotFound {
                team_id: member.team_id(),
                student_id: member.student_id(),
            });
        }
        state.members.insert(key, member.clone());
        Ok(())
    }
}
