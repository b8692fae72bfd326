use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use std::sync::Arc;

use crate::aggregation::MenuAggregator;

#[derive(Clone)]
pub struct AppState {
    pub redis: RedisClient,
    pub aggregator: Arc<MenuAggregator>,
}

pub type RedisClient = Pool<RedisConnectionManager>;
