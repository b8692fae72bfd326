pub mod get;
pub mod post;

use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{errors::AppError, state::RedisClient, stores::UserDirectory};

pub struct RedisUserDirectory {
    redis: RedisClient,
}

impl RedisUserDirectory {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl UserDirectory for RedisUserDirectory {
    async fn display_names(
        &self,
        user_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, String>, AppError> {
        get::get_display_names(user_ids, self.redis.clone()).await
    }
}
