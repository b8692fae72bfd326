pub mod get;
pub mod put;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{errors::AppError, models::RatingStats, state::RedisClient, stores::RatingStore};

pub struct RedisRatingStore {
    redis: RedisClient,
}

impl RedisRatingStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl RatingStore for RedisRatingStore {
    async fn upsert(&self, menu_id: Uuid, user_id: Uuid, rating: u8) -> Result<(), AppError> {
        put::upsert_rating(menu_id, user_id, rating, self.redis.clone()).await
    }

    async fn aggregate_all(&self) -> Result<Vec<RatingStats>, AppError> {
        get::aggregate_all_ratings(self.redis.clone()).await
    }

    async fn aggregate_for(&self, menu_ids: &[Uuid]) -> Result<Vec<RatingStats>, AppError> {
        get::aggregate_ratings_for(menu_ids, self.redis.clone()).await
    }

    async fn user_rating(&self, menu_id: Uuid, user_id: Uuid) -> Result<Option<u8>, AppError> {
        get::get_user_rating(menu_id, user_id, self.redis.clone()).await
    }
}
