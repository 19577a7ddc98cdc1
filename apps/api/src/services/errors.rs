use thiserror::Error;

use crate::domain::repositories::RepositoryError;

/// Errors returned by application services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Team not found: {0}")]
    NotFound(i32),

    #[error("Team has not been persisted yet")]
    NotPersisted,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
