pub mod get;
pub mod post;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{errors::AppError, models::MenuComment, state::RedisClient, stores::CommentStore};

pub struct RedisCommentStore {
    redis: RedisClient,
}

impl RedisCommentStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl CommentStore for RedisCommentStore {
    async fn insert(&self, comment: &MenuComment) -> Result<(), AppError> {
        post::insert_comment(comment, self.redis.clone()).await
    }

    async fn find_by_menu_ids(&self, menu_ids: &[Uuid]) -> Result<Vec<MenuComment>, AppError> {
        get::get_comments_by_menu_ids(menu_ids, self.redis.clone()).await
    }
}
