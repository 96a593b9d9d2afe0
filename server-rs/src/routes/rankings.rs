use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::RankingsResponse;
use crate::services::rankings;
use crate::AppState;

#[derive(Deserialize)]
pub struct RankingsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub async fn get_rankings(
    State(state): State<AppState>,
    Query(q): Query<RankingsQuery>,
) -> AppResult<Json<RankingsResponse>> {
    let (page, limit) = rankings::resolve_page(q.page, q.limit, &state.config.rankings)?;

    let response = rankings::fetch_page(
        state.store.as_ref(),
        state.cache.as_ref(),
        &state.config.rankings,
        page,
        limit,
    )
    .await
    .map_err(|e| AppError::from_store(e, state.config.errors.expose_store_messages))?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::build_router;
    use crate::testing::{get_json, ranked_players, test_state, FakeStore};

    #[tokio::test]
    async fn default_page() {
        let store = FakeStore::default().with_players(ranked_players(25));
        let (status, body) = get_json(build_router(test_state(store)), "/api/rankings", &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["players"].as_array().unwrap().len(), 20);
        assert_eq!(body["pagination"]["currentPage"], 1);
        assert_eq!(body["pagination"]["totalPages"], 2);
        assert_eq!(body["pagination"]["hasMore"], true);
    }

    #[tokio::test]
    async fn explicit_page_and_limit() {
        let store = FakeStore::default().with_players(ranked_players(25));
        let (_, body) = get_json(
            build_router(test_state(store)),
            "/api/rankings?page=3&limit=10",
            &[],
        )
        .await;
        assert_eq!(body["players"].as_array().unwrap().len(), 5);
        assert_eq!(body["players"][0]["ranking_position"], 21);
        assert_eq!(body["pagination"]["hasMore"], false);
    }

    #[tokio::test]
    async fn oversized_limit_is_rejected() {
        let (status, _) = get_json(
            build_router(test_state(FakeStore::default())),
            "/api/rankings?limit=1000",
            &[],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
