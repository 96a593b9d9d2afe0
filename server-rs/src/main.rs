use std::net::SocketAddr;
use std::sync::Arc;

use padel_club_api::{
    build_router, cache::Cache, clock::SystemClock, config::Config, db, AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .json()
        .init();

    let pool = db::create_pool(&config).await.map_err(|e| {
        tracing::error!("Failed to connect to PostgreSQL: {e}");
        e
    })?;

    let cache = match &config.redis.url {
        Some(url) => match Cache::connect(url, &config.redis.key_prefix).await {
            Ok(cache) => Some(cache),
            Err(e) => {
                tracing::warn!("Redis unavailable, rankings will not be cached: {e}");
                None
            }
        },
        None => None,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        env = %config.app_env,
        locale = config.display.default_locale.tag,
        cache = cache.is_some(),
        "Padel club API initialized"
    );

    let state = AppState {
        store: Arc::new(db::PgClubStore::new(pool)),
        cache,
        config: Arc::new(config),
        clock: Arc::new(SystemClock),
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
