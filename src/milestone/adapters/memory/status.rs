//! In-memory repository for team milestone status tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::milestone::{
    domain::{MilestoneId, TeamMilestoneStatus},
    ports::{
        MilestoneStatusRepository, MilestoneStatusRepositoryError,
        MilestoneStatusRepositoryResult,
    },
};
use crate::roster::domain::TeamId;

/// Thread-safe in-memory status repository keyed by (team, milestone).
#[derive(Debug, Clone, Default)]
pub struct InMemoryMilestoneStatusRepository {
    state: Arc<RwLock<HashMap<(TeamId, MilestoneId), TeamMilestoneStatus>>>,
}

impl InMemoryMilestoneStatusRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MilestoneStatusRepository for InMemoryMilestoneStatusRepository {
    async fn upsert(&self, status: &TeamMilestoneStatus) -> MilestoneStatusRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            MilestoneStatusRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert((status.team_id(), status.milestone_id()), status.clone());
        Ok(())
    }

    async fn find(
        &self,
        team_id: TeamId,
        milestone_id: MilestoneId,
    ) -> MilestoneStatusRepositoryResult<Option<TeamMilestoneStatus>> {
        let state = self.state.read().map_err(|err| {
            MilestoneStatusRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&(team_id, milestone_id)).cloned())
    }
}
