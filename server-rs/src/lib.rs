use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware as axum_mw,
    routing::get,
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod cache;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(test)]
mod testing;

use cache::Cache;
use clock::Clock;
use config::Config;
use store::ClubStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClubStore>,
    pub cache: Option<Cache>,
    pub config: Arc<Config>,
    pub clock: Arc<dyn Clock>,
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.cors_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            config
                .cors_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router(state: AppState) -> Router {
    let lesson_routes = Router::new()
        .route("/admin/schedules", get(routes::lessons::list_admin_schedules))
        .route("/schedules/window", get(routes::lessons::get_schedule_window));

    let enrollment_routes =
        Router::new().route("/progress", get(routes::enrollment::get_progress));

    let api = Router::new()
        .nest("/lessons", lesson_routes)
        .nest("/enrollment", enrollment_routes)
        .route("/rankings", get(routes::rankings::get_rankings));

    Router::new()
        .nest("/api", api)
        .route("/health", get(routes::health::health))
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::localization::locale_detector,
        ))
        .layer(CompressionLayer::new())
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
