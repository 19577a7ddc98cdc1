// Application services
// Orchestrate domain rules over injected repository ports

pub mod errors;
pub mod team_service;

pub use errors::{ServiceError, ServiceResult};
pub use team_service::TeamService;
