pub mod get;
pub mod post;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{errors::AppError, models::Stall, state::RedisClient, stores::StallStore};

pub struct RedisStallStore {
    redis: RedisClient,
}

impl RedisStallStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl StallStore for RedisStallStore {
    async fn find_by_ids(&self, stall_ids: &[Uuid]) -> Result<Vec<Stall>, AppError> {
        get::get_stalls_by_ids(stall_ids, self.redis.clone()).await
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Stall>, AppError> {
        get::search_stalls_by_name(term, self.redis.clone()).await
    }
}
