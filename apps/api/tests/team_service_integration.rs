//! Integration tests for the team service
//!
//! These tests drive the service end to end over the in-memory store,
//! covering CRUD flows and the evolution rule.

use std::sync::Arc;

use async_trait::async_trait;
use kaddem_api::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use kaddem_api::domain::team::{Level, Team, TeamEvent};
use kaddem_api::infrastructure::repositories::InMemoryTeamRepository;
use kaddem_api::services::{ServiceError, TeamService};

/// In-memory store whose saves fail for one team ID
struct FailingSaveRepository {
    inner: InMemoryTeamRepository,
    failing_id: i32,
}

#[async_trait]
impl TeamRepository for FailingSaveRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Team>> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, team: Team) -> RepositoryResult<Team> {
        if team.id() == Some(self.failing_id) {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        self.inner.save(team).await
    }

    async fn delete(&self, team: &Team) -> RepositoryResult<()> {
        self.inner.delete(team).await
    }
}

/// Service over a fresh store, plus a handle on the store for inspection
fn setup() -> (TeamService<InMemoryTeamRepository>, InMemoryTeamRepository) {
    let repo = InMemoryTeamRepository::new();
    (TeamService::new(Arc::new(repo.clone())), repo)
}

/// Store seeded with one JUNIOR and one SENIOR team
async fn seeded() -> (TeamService<InMemoryTeamRepository>, InMemoryTeamRepository) {
    let (service, repo) = setup();
    service
        .add_team(Team::new("Equipe Test", Level::Junior))
        .await
        .expect("add junior team");
    service
        .add_team(Team::new("Equipe 2", Level::Senior))
        .await
        .expect("add senior team");
    (service, repo)
}

#[tokio::test]
async fn test_add_then_list_preserves_store_order() {
    let (service, _repo) = seeded().await;

    let teams = service.list_teams().await.expect("list teams");

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].name(), "Equipe Test");
    assert_eq!(teams[1].name(), "Equipe 2");
}

#[tokio::test]
async fn test_add_assigns_id_and_keeps_level() {
    let (service, _repo) = setup();

    let stored = service
        .add_team(Team::new("Equipe Test", Level::Junior))
        .await
        .expect("add team");

    assert_eq!(stored.id(), Some(1));
    assert_eq!(stored.name(), "Equipe Test");
    assert_eq!(stored.level(), Level::Junior);
}

#[tokio::test]
async fn test_get_team() {
    let (service, _repo) = seeded().await;

    let team = service.get_team(1).await.expect("get team");

    assert_eq!(team.id(), Some(1));
    assert_eq!(team.name(), "Equipe Test");
}

#[tokio::test]
async fn test_get_team_on_empty_store_fails() {
    let (service, _repo) = setup();

    let result = service.get_team(1).await;

    assert!(matches!(result, Err(ServiceError::NotFound(1))));
}

#[tokio::test]
async fn test_update_team() {
    let (service, repo) = seeded().await;

    let mut team = service.get_team(1).await.expect("get team");
    team.set_name("Equipe Modifiée");
    team.set_level(Level::Senior);

    let updated = service.update_team(team).await.expect("update team");
    assert_eq!(updated.name(), "Equipe Modifiée");
    assert_eq!(updated.level(), Level::Senior);

    let stored = repo.find_by_id(1).await.expect("find").expect("present");
    assert_eq!(stored, updated);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_update_missing_team_fails() {
    let (service, repo) = setup();

    let result = service
        .update_team(Team::from_persistence(3, "Fantôme", Level::Expert))
        .await;

    assert!(matches!(result, Err(ServiceError::NotFound(3))));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_delete_team() {
    let (service, _repo) = seeded().await;

    service.delete_team(1).await.expect("delete team");

    let remaining = service.list_teams().await.expect("list teams");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name(), "Equipe 2");
    assert!(matches!(
        service.get_team(1).await,
        Err(ServiceError::NotFound(1))
    ));
}

#[tokio::test]
async fn test_delete_missing_team_fails() {
    let (service, _repo) = seeded().await;

    let result = service.delete_team(99).await;

    assert!(matches!(result, Err(ServiceError::NotFound(99))));
    assert_eq!(service.list_teams().await.expect("list").len(), 2);
}

#[tokio::test]
async fn test_evolve_teams() {
    let (service, _repo) = seeded().await;
    service
        .add_team(Team::new("Equipe 3", Level::Expert))
        .await
        .expect("add expert team");

    let events = service.evolve_teams().await.expect("evolve teams");

    assert_eq!(
        events,
        vec![
            TeamEvent::Promoted {
                team_id: 1,
                from: Level::Junior,
                to: Level::Senior,
            },
            TeamEvent::Promoted {
                team_id: 2,
                from: Level::Senior,
                to: Level::Expert,
            },
        ]
    );

    let levels: Vec<Level> = service
        .list_teams()
        .await
        .expect("list teams")
        .iter()
        .map(Team::level)
        .collect();
    assert_eq!(levels, vec![Level::Senior, Level::Expert, Level::Expert]);
}

#[tokio::test]
async fn test_repeated_evolution_caps_at_expert() {
    let (service, _repo) = seeded().await;

    service.evolve_teams().await.expect("first pass");
    service.evolve_teams().await.expect("second pass");
    let events = service.evolve_teams().await.expect("third pass");

    assert!(events.is_empty());
    let teams = service.list_teams().await.expect("list teams");
    assert!(teams.iter().all(|t| t.level() == Level::Expert));
}

#[tokio::test]
async fn test_evolve_empty_store() {
    let (service, _repo) = setup();

    let events = service.evolve_teams().await.expect("evolve teams");

    assert!(events.is_empty());
}

#[tokio::test]
async fn test_evolve_keeps_earlier_promotions_when_a_later_save_fails() {
    let (_service, repo) = seeded().await;
    let service = TeamService::new(Arc::new(FailingSaveRepository {
        inner: repo.clone(),
        failing_id: 2,
    }));

    let result = service.evolve_teams().await;

    assert!(matches!(
        result,
        Err(ServiceError::Repository(RepositoryError::Database(_)))
    ));
    let first = repo.find_by_id(1).await.expect("find").expect("present");
    let second = repo.find_by_id(2).await.expect("find").expect("present");
    assert_eq!(first.level(), Level::Senior);
    assert_eq!(second.level(), Level::Senior);
}

#[tokio::test]
async fn test_add_team_with_max_id_does_not_panic() {
    let (service, _repo) = setup();

    let stored = service
        .add_team(Team::from_persistence(i32::MAX, "Max", Level::Junior))
        .await
        .expect("add team with max ID");
    assert_eq!(stored.id(), Some(i32::MAX));

    let result = service.add_team(Team::new("Equipe suivante", Level::Junior)).await;
    assert!(matches!(
        result,
        Err(ServiceError::Repository(RepositoryError::IdSpaceExhausted))
    ));
}
