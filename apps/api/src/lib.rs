//! Kaddem API Library
//!
//! Team (Equipe) management for the Kaddem student-management application:
//! domain model, repository ports and adapters, and the team service.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
