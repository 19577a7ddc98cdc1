// Repository contracts (ports) implemented by infrastructure adapters

pub mod team_repository;

pub use team_repository::{RepositoryError, RepositoryResult, TeamRepository};
#[cfg(test)]
pub use team_repository::MockTeamRepository;
