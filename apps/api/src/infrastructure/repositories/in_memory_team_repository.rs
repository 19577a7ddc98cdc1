//! In-memory team repository implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::Team;

#[derive(Debug)]
struct State {
    teams: BTreeMap<i32, Team>,
    // Wider than the ID type so an explicit `i32::MAX` cannot overflow it.
    next_id: i64,
}

/// In-memory implementation of TeamRepository
///
/// IDs are assigned sequentially from 1 and teams enumerate in ID order.
#[derive(Debug, Clone)]
pub struct InMemoryTeamRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryTeamRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                teams: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Number of stored teams
    pub async fn len(&self) -> usize {
        self.state.read().await.teams.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let state = self.state.read().await;
        Ok(state.teams.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Team>> {
        let state = self.state.read().await;
        Ok(state.teams.get(&id).cloned())
    }

    async fn save(&self, team: Team) -> RepositoryResult<Team> {
        let mut state = self.state.write().await;

        let id = match team.id() {
            Some(id) => id,
            None => i32::try_from(state.next_id)
                .map_err(|_| RepositoryError::IdSpaceExhausted)?,
        };
        // Explicit IDs must not be handed out again later.
        state.next_id = state.next_id.max(i64::from(id) + 1);

        let stored = Team::from_persistence(id, team.name(), team.level());
        state.teams.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, team: &Team) -> RepositoryResult<()> {
        let id = team.id().ok_or(RepositoryError::NotPersisted)?;
        let mut state = self.state.write().await;

        match state.teams.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(id)),
        }
    }
}
