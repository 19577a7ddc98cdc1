//! Team service for team management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamEvent};
use crate::services::errors::{ServiceError, ServiceResult};

/// Team service for managing teams
///
/// Every operation issues its store calls one at a time; concurrency
/// control belongs to the repository.
#[derive(Debug)]
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> TeamService<R> {
    /// Create a new team service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all teams in store order
    pub async fn list_teams(&self) -> ServiceResult<Vec<Team>> {
        let teams = self.repository.find_all().await?;
        debug!(count = teams.len(), "Listed teams");
        Ok(teams)
    }

    /// Persist a new team and return the stored representation
    pub async fn add_team(&self, team: Team) -> ServiceResult<Team> {
        info!(name = %team.name(), level = %team.level(), "Adding team");

        let stored = self.repository.save(team).await?;
        debug!(id = ?stored.id(), "Team added");
        Ok(stored)
    }

    /// Get a team by ID
    pub async fn get_team(&self, id: i32) -> ServiceResult<Team> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Overwrite a stored team with the given field values
    ///
    /// The team must already exist in the store.
    pub async fn update_team(&self, team: Team) -> ServiceResult<Team> {
        let id = team.id().ok_or(ServiceError::NotPersisted)?;
        info!(id, name = %team.name(), level = %team.level(), "Updating team");

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound(id));
        }

        let stored = self.repository.save(team).await?;
        debug!(id, "Team updated");
        Ok(stored)
    }

    /// Delete a team by ID
    pub async fn delete_team(&self, id: i32) -> ServiceResult<()> {
        info!(id, "Deleting team");

        let team = self.get_team(id).await?;
        self.repository.delete(&team).await?;

        debug!(id, "Team deleted");
        Ok(())
    }

    /// Promote every stored team by one level
    ///
    /// Junior teams become Senior, Senior teams become Expert and Expert
    /// teams are left alone. Each promoted team is saved on its own, so a
    /// failed save aborts the pass with earlier promotions already stored.
    ///
    /// # Returns
    /// The `Promoted` events, in store order
    pub async fn evolve_teams(&self) -> ServiceResult<Vec<TeamEvent>> {
        let teams = self.repository.find_all().await?;
        info!(count = teams.len(), "Evolving teams");

        let mut events = Vec::new();
        for mut team in teams {
            let Some((from, to)) = team.promote() else {
                continue;
            };

            let saved = self.repository.save(team).await?;
            let team_id = saved.id().ok_or(ServiceError::NotPersisted)?;

            info!(team_id, %from, %to, "Team promoted");
            events.push(TeamEvent::Promoted { team_id, from, to });
        }

        Ok(events)
    }
}
