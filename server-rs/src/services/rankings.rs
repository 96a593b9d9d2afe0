use crate::cache::Cache;
use crate::config::RankingsConfig;
use crate::error::AppError;
use crate::models::{Pagination, RankingsResponse};
use crate::store::ClubStore;

fn page_key(page: u32, limit: u32) -> String {
    format!("rankings:page:{page}:limit:{limit}")
}

/// Resolves and validates the requested page and limit.
pub fn resolve_page(
    page: Option<u32>,
    limit: Option<u32>,
    config: &RankingsConfig,
) -> Result<(u32, u32), AppError> {
    let page = page.unwrap_or(1);
    if page == 0 {
        return Err(AppError::BadRequest("page must be at least 1".into()));
    }
    let limit = limit.unwrap_or(config.default_limit);
    if limit == 0 || limit > config.max_limit {
        return Err(AppError::BadRequest(format!(
            "limit must be between 1 and {}",
            config.max_limit
        )));
    }
    Ok((page, limit))
}

/// One page of the ranking table, served from cache when available.
pub async fn fetch_page(
    store: &dyn ClubStore,
    cache: Option<&Cache>,
    config: &RankingsConfig,
    page: u32,
    limit: u32,
) -> Result<RankingsResponse, sqlx::Error> {
    let key = page_key(page, limit);
    if let Some(cache) = cache {
        if let Some(hit) = cache.get_json::<RankingsResponse>(&key).await {
            return Ok(hit);
        }
    }

    let total = store.ranked_player_count().await?;
    let pagination = Pagination::new(page, limit, total);
    let players = if pagination.offset() < total {
        store.ranking_page(pagination.offset(), limit).await?
    } else {
        Vec::new()
    };
    let response = RankingsResponse::new(players, pagination);

    if let Some(cache) = cache {
        cache.set_json(&key, &response, config.cache_seconds).await;
    }

    Ok(response)
}
