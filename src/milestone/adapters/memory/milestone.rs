//! In-memory repository for milestone definition tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::milestone::{
    domain::{Milestone, MilestoneId},
    ports::{MilestoneRepository, MilestoneRepositoryError, MilestoneRepositoryResult},
};
use crate::roster::domain::ClassId;

/// Thread-safe in-memory milestone definition repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMilestoneRepository {
    state: Arc<RwLock<InMemoryMilestoneState>>,
}

#[derive(Debug, Default)]
struct InMemoryMilestoneState {
    milestones: HashMap<MilestoneId, Milestone>,
    // Definition order per class; list_for_class returns it verbatim.
    class_index: HashMap<ClassId, Vec<MilestoneId>>,
}

impl InMemoryMilestoneRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MilestoneRepository for InMemoryMilestoneRepository {
    async fn store(&self, milestone: &Milestone) -> MilestoneRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            MilestoneRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.milestones.contains_key(&milestone.id()) {
            return Err(MilestoneRepositoryError::DuplicateMilestone(milestone.id()));
        }
        state
            .class_index
            .entry(milestone.class_id())
            .or_default()
            .push(milestone.id());
        state.milestones.insert(milestone.id(), milestone.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: MilestoneId) -> MilestoneRepositoryResult<Option<Milestone>> {
        let state = self.state.read().map_err(|err| {
            MilestoneRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.milestones.get(&id).cloned())
    }

    async fn list_for_class(&self, class_id: ClassId) -> MilestoneRepositoryResult<Vec<Milestone>> {
        let state = self.state.read().map_err(|err| {
            MilestoneRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let milestones = state
            .class_index
            .get(&class_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.milestones.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(milestones)
    }
}
