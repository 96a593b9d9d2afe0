use async_trait::async_trait;

use crate::models::{LessonSlotBatch, RankingPlayer};

/// Read access to the club's hosted relational store.
#[async_trait]
pub trait ClubStore: Send + Sync {
    /// All lesson slot batches, most recently created first.
    async fn lesson_slot_batches(&self) -> Result<Vec<LessonSlotBatch>, sqlx::Error>;

    async fn ranked_player_count(&self) -> Result<u64, sqlx::Error>;

    /// Players ordered by `ranking_position` ascending.
    async fn ranking_page(&self, offset: u64, limit: u32)
        -> Result<Vec<RankingPlayer>, sqlx::Error>;

    async fn health_check(&self) -> bool;
}
