use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::domain::team::Team;

/// Errors raised by team store adapters
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid level stored for team: {0}")]
    InvalidLevel(String),

    #[error("Team has not been persisted yet")]
    NotPersisted,

    #[error("Team not found: {0}")]
    NotFound(i32),

    #[error("No team IDs left to assign")]
    IdSpaceExhausted,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations own ID assignment and enumeration order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Return every stored team in the store's enumeration order
    async fn find_all(&self) -> RepositoryResult<Vec<Team>>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Team>>;

    /// Save a team (insert when it has no ID, upsert otherwise)
    ///
    /// Returns the stored representation, including the assigned ID.
    async fn save(&self, team: Team) -> RepositoryResult<Team>;

    /// Delete a stored team
    async fn delete(&self, team: &Team) -> RepositoryResult<()>;
}
