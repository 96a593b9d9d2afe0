//! In-memory store and request helpers shared by unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use sqlx::error::{DatabaseError, ErrorKind};
use tower::ServiceExt;

use crate::clock::FixedClock;
use crate::config::Config;
use crate::models::{LessonSlotBatch, RankingPlayer, Trend};
use crate::store::ClubStore;
use crate::AppState;

/// A server-side error as the database would report it.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FakeDatabaseError(pub String);

impl DatabaseError for FakeDatabaseError {
    fn message(&self) -> &str {
        &self.0
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Default)]
pub struct FakeStore {
    batches: Vec<LessonSlotBatch>,
    players: Vec<RankingPlayer>,
    failure: Option<String>,
}

impl FakeStore {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_batches(mut self, batches: Vec<LessonSlotBatch>) -> Self {
        self.batches = batches;
        self
    }

    pub fn with_players(mut self, players: Vec<RankingPlayer>) -> Self {
        self.players = players;
        self
    }

    /// The error every query returns when the store is failing.
    pub fn error_for(message: &str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDatabaseError(message.to_string())))
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        match &self.failure {
            Some(message) => Err(Self::error_for(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ClubStore for FakeStore {
    async fn lesson_slot_batches(&self) -> Result<Vec<LessonSlotBatch>, sqlx::Error> {
        self.check()?;
        let mut batches = self.batches.clone();
        batches.sort_by_key(|b| std::cmp::Reverse(b.created_at()));
        Ok(batches)
    }

    async fn ranked_player_count(&self) -> Result<u64, sqlx::Error> {
        self.check()?;
        Ok(self.players.len() as u64)
    }

    async fn ranking_page(
        &self,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<RankingPlayer>, sqlx::Error> {
        self.check()?;
        Ok(self
            .players
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> bool {
        self.failure.is_none()
    }
}

pub fn batch(id: u32, created_at: &str) -> LessonSlotBatch {
    match json!({ "id": id, "created_at": created_at, "court": "Pista 1" }) {
        Value::Object(fields) => LessonSlotBatch::from_fields(fields),
        _ => unreachable!(),
    }
}

pub fn ranked_players(count: i32) -> Vec<RankingPlayer> {
    (1..=count)
        .map(|position| RankingPlayer {
            id: format!("player-{position}"),
            name: Some(format!("Name{position}")),
            surname: None,
            avatar_url: None,
            trend: Trend::Same,
            matches_played: 10,
            matches_won: 5,
            total_points: 2000 - position,
            ranking_position: position,
        })
        .collect()
}

pub fn test_config(pairs: &[(&str, &str)]) -> Config {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(move |key| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
}

/// State on 2024-01-30 15:00 UTC with the club clock pinned to UTC.
pub fn test_state(store: FakeStore) -> AppState {
    AppState {
        store: Arc::new(store),
        cache: None,
        config: Arc::new(test_config(&[("CLUB_UTC_OFFSET", "+00:00")])),
        clock: Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 1, 30, 15, 0, 0).unwrap(),
        )),
    }
}

pub async fn get_json(router: Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    let response = router
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
