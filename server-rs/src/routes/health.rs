use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let db_ok = state.store.health_check().await;
    let redis_ok = match &state.cache {
        Some(cache) => Some(cache.health_check().await),
        None => None,
    };

    let status = if db_ok && redis_ok != Some(false) {
        "healthy"
    } else {
        "degraded"
    };
    Json(json!({
        "status": status,
        "postgres": db_ok,
        "redis": redis_ok,
        "timestamp": state.clock.now(),
    }))
}
