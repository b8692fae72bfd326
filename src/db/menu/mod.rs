pub mod get;
pub mod post;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{errors::AppError, models::MenuItem, state::RedisClient, stores::MenuStore};

pub struct RedisMenuStore {
    redis: RedisClient,
}

impl RedisMenuStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl MenuStore for RedisMenuStore {
    async fn find_by_id(&self, menu_id: Uuid) -> Result<Option<MenuItem>, AppError> {
        get::get_menu_by_id(menu_id, self.redis.clone()).await
    }

    async fn find_by_ids(&self, menu_ids: &[Uuid]) -> Result<Vec<MenuItem>, AppError> {
        get::get_menus_by_ids(menu_ids, self.redis.clone()).await
    }

    async fn find_by_stalls(&self, stall_ids: &[Uuid]) -> Result<Vec<MenuItem>, AppError> {
        get::get_menus_by_stalls(stall_ids, self.redis.clone()).await
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<MenuItem>, AppError> {
        get::search_menus_by_name(term, self.redis.clone()).await
    }

    async fn all_menu_ids(&self) -> Result<Vec<Uuid>, AppError> {
        get::get_all_menu_ids(self.redis.clone()).await
    }
}
