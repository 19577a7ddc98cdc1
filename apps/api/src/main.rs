use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use kaddem_api::config::{AppConfig, StoreKind};
use kaddem_api::domain::repositories::TeamRepository;
use kaddem_api::infrastructure::repositories::{InMemoryTeamRepository, PostgresTeamRepository};
use kaddem_api::services::TeamService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    match config.store {
        StoreKind::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url_or_default())
                .await?;
            tracing::info!("Database connected successfully");

            let repository = PostgresTeamRepository::new(pool);
            repository.migrate().await?;
            run_evolution(Arc::new(repository)).await?;
        }
        StoreKind::Memory => {
            tracing::warn!("In-memory team store starts empty, evolution pass has nothing to promote");
            run_evolution(Arc::new(InMemoryTeamRepository::new())).await?;
        }
    }

    Ok(())
}

/// Runs one evolution pass and logs the resulting teams
async fn run_evolution<R: TeamRepository>(
    repository: Arc<R>,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = TeamService::new(repository);

    let events = service.evolve_teams().await?;
    tracing::info!(promoted = events.len(), "Evolution pass finished");

    for team in service.list_teams().await? {
        tracing::info!(
            id = ?team.id(),
            name = %team.name(),
            level = %team.level(),
            "Team"
        );
    }

    Ok(())
}
