use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::{Level, Team};

/// Row shape of the `equipes` table
#[derive(Debug, sqlx::FromRow)]
struct EquipeRow {
    id_equipe: i32,
    nom_equipe: String,
    niveau: String,
}

impl TryFrom<EquipeRow> for Team {
    type Error = RepositoryError;

    fn try_from(row: EquipeRow) -> Result<Self, Self::Error> {
        let level = row
            .niveau
            .parse::<Level>()
            .map_err(|e| RepositoryError::InvalidLevel(e.0))?;

        Ok(Team::from_persistence(row.id_equipe, row.nom_equipe, level))
    }
}

/// PostgreSQL implementation of TeamRepository
///
/// Persists teams in the `equipes` table. Queries are bound at runtime so the
/// crate builds without a live database.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded schema migrations
    pub async fn migrate(&self) -> RepositoryResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, EquipeRow>(
            r#"
            SELECT id_equipe, nom_equipe, niveau
            FROM equipes
            ORDER BY id_equipe
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Team::try_from).collect()
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Team>> {
        let row = sqlx::query_as::<_, EquipeRow>(
            r#"
            SELECT id_equipe, nom_equipe, niveau
            FROM equipes
            WHERE id_equipe = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Team::try_from).transpose()
    }

    async fn save(&self, team: Team) -> RepositoryResult<Team> {
        let row = match team.id() {
            None => {
                sqlx::query_as::<_, EquipeRow>(
                    r#"
                    INSERT INTO equipes (nom_equipe, niveau)
                    VALUES ($1, $2)
                    RETURNING id_equipe, nom_equipe, niveau
                    "#,
                )
                .bind(team.name())
                .bind(team.level().as_str())
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                let mut tx = self.pool.begin().await?;

                let row = sqlx::query_as::<_, EquipeRow>(
                    r#"
                    INSERT INTO equipes (id_equipe, nom_equipe, niveau)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (id_equipe) DO UPDATE SET
                        nom_equipe = EXCLUDED.nom_equipe,
                        niveau = EXCLUDED.niveau
                    RETURNING id_equipe, nom_equipe, niveau
                    "#,
                )
                .bind(id)
                .bind(team.name())
                .bind(team.level().as_str())
                .fetch_one(&mut *tx)
                .await?;

                // Explicit IDs bypass the sequence; move it past them.
                sqlx::query(
                    r#"
                    SELECT setval(
                        pg_get_serial_sequence('equipes', 'id_equipe'),
                        GREATEST((SELECT MAX(id_equipe) FROM equipes), 1)
                    )
                    "#,
                )
                .execute(&mut *tx)
                .await?;

                tx.commit().await?;
                row
            }
        };

        Team::try_from(row)
    }

    async fn delete(&self, team: &Team) -> RepositoryResult<()> {
        let id = team.id().ok_or(RepositoryError::NotPersisted)?;

        let result = sqlx::query("DELETE FROM equipes WHERE id_equipe = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }
}
