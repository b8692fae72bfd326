use crate::{
    db::checkout,
    errors::AppError,
    models::redis::RedisKey,
    state::RedisClient,
};
use uuid::Uuid;

/// HSET keyed by user id: a second rating from the same user overwrites the
/// first instead of adding a data point.
pub async fn upsert_rating(
    menu_id: Uuid,
    user_id: Uuid,
    rating: u8,
    redis: RedisClient,
) -> Result<(), AppError> {
    let mut conn = checkout(&redis).await?;

    let _: () = redis::cmd("HSET")
        .arg(RedisKey::menu_ratings(menu_id))
        .arg(user_id.to_string())
        .arg(rating)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
