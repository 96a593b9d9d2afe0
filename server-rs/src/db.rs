use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;

use crate::config::Config;
use crate::models::{LessonSlotBatch, RankingPlayer, Trend};
use crate::store::ClubStore;

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let url = config.database_url();
    PgPoolOptions::new()
        .min_connections(config.db.pool_min)
        .max_connections(config.db.pool_max)
        .acquire_timeout(std::time::Duration::from_secs(10))
        .connect(&url)
        .await
}

#[derive(sqlx::FromRow)]
struct RankingRow {
    id: String,
    name: Option<String>,
    surname: Option<String>,
    avatar_url: Option<String>,
    trend: Option<String>,
    matches_played: i32,
    matches_won: i32,
    total_points: i32,
    ranking_position: i32,
}

impl From<RankingRow> for RankingPlayer {
    fn from(row: RankingRow) -> Self {
        let trend = match row.trend.as_deref().map(str::parse::<Trend>) {
            Some(Ok(trend)) => trend,
            Some(Err(e)) => {
                tracing::warn!(player_id = %row.id, "{e}, treating as same");
                Trend::Same
            }
            None => Trend::Same,
        };
        Self {
            id: row.id,
            name: row.name,
            surname: row.surname,
            avatar_url: row.avatar_url,
            trend,
            matches_played: row.matches_played,
            matches_won: row.matches_won,
            total_points: row.total_points,
            ranking_position: row.ranking_position,
        }
    }
}

#[derive(Clone)]
pub struct PgClubStore {
    pool: PgPool,
}

impl PgClubStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubStore for PgClubStore {
    async fn lesson_slot_batches(&self) -> Result<Vec<LessonSlotBatch>, sqlx::Error> {
        let rows: Vec<Json<LessonSlotBatch>> = sqlx::query_scalar(
            "SELECT to_jsonb(b) FROM lesson_slot_batches b ORDER BY b.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|Json(batch)| batch).collect())
    }

    async fn ranked_player_count(&self) -> Result<u64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*)::bigint FROM player_rankings")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn ranking_page(
        &self,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<RankingPlayer>, sqlx::Error> {
        let rows: Vec<RankingRow> = sqlx::query_as(
            r#"SELECT id::text AS id, name, surname, avatar_url, trend::text AS trend,
                matches_played::int4 AS matches_played,
                matches_won::int4 AS matches_won,
                total_points::int4 AS total_points,
                ranking_position::int4 AS ranking_position
            FROM player_rankings
            ORDER BY ranking_position ASC
            OFFSET $1 LIMIT $2"#,
        )
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RankingPlayer::from).collect())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}
