pub mod aggregation;
mod db;
pub mod errors;
mod http;
mod middleware;
pub mod models;
mod state;
pub mod stores;

use axum::{Router, middleware as axum_middleware};
use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::aggregation::MenuAggregator;
use crate::db::{
    comment::RedisCommentStore, menu::RedisMenuStore, rating::RedisRatingStore,
    stall::RedisStallStore, user::RedisUserDirectory,
};

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let redis_url = std::env::var("REDIS_URL").expect("REDIS_URL must be set");
    let manager = RedisConnectionManager::new(redis_url).unwrap();

    let redis_pool = Pool::builder().build(manager).await.unwrap();

    // Stores are built once here and injected into the aggregation service,
    // so nothing downstream reaches for a lazily-initialized global client.
    let aggregator = Arc::new(MenuAggregator::new(
        Arc::new(RedisMenuStore::new(redis_pool.clone())),
        Arc::new(RedisStallStore::new(redis_pool.clone())),
        Arc::new(RedisRatingStore::new(redis_pool.clone())),
        Arc::new(RedisCommentStore::new(redis_pool.clone())),
        Arc::new(RedisUserDirectory::new(redis_pool.clone())),
    ));

    let state = AppState {
        redis: redis_pool,
        aggregator,
    };

    let global_rate_limiter = create_global_rate_limiter();

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer())
        .fallback(|| async { "404 Not Found" });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3001);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind address");

    tracing::info!("TasteTribe server running at http://0.0.0.0:{port}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
