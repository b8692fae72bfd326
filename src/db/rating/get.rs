use crate::{
    db::checkout,
    errors::AppError,
    models::{RatingStats, redis::RedisKey},
    state::RedisClient,
};
use uuid::Uuid;

/// Aggregate every menu's rating hash into `{menu_id, average, count}`.
/// Menus nobody has rated have no hash and therefore no entry.
pub async fn aggregate_all_ratings(redis: RedisClient) -> Result<Vec<RatingStats>, AppError> {
    let mut conn = checkout(&redis).await?;

    let rating_keys: Vec<String> = redis::cmd("KEYS")
        .arg(RedisKey::menu_ratings_pattern())
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    let mut stats = Vec::new();

    for key in rating_keys {
        let Some(menu_id) = RedisKey::extract_menu_id_from_ratings_key(&key) else {
            continue;
        };

        let values: Vec<u8> = redis::cmd("HVALS")
            .arg(&key)
            .query_async(&mut *conn)
            .await
            .map_err(AppError::RedisCommandError)?;

        if let Some(stat) = stats_from_values(menu_id, &values) {
            stats.push(stat);
        }
    }

    Ok(stats)
}

pub async fn aggregate_ratings_for(
    menu_ids: &[Uuid],
    redis: RedisClient,
) -> Result<Vec<RatingStats>, AppError> {
    if menu_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut conn = checkout(&redis).await?;
    let mut stats = Vec::new();

    for menu_id in menu_ids {
        let values: Vec<u8> = redis::cmd("HVALS")
            .arg(RedisKey::menu_ratings(*menu_id))
            .query_async(&mut *conn)
            .await
            .map_err(AppError::RedisCommandError)?;

        if let Some(stat) = stats_from_values(*menu_id, &values) {
            stats.push(stat);
        }
    }

    Ok(stats)
}

pub async fn get_user_rating(
    menu_id: Uuid,
    user_id: Uuid,
    redis: RedisClient,
) -> Result<Option<u8>, AppError> {
    let mut conn = checkout(&redis).await?;

    let rating: Option<u8> = redis::cmd("HGET")
        .arg(RedisKey::menu_ratings(menu_id))
        .arg(user_id.to_string())
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(rating)
}

fn stats_from_values(menu_id: Uuid, values: &[u8]) -> Option<RatingStats> {
    if values.is_empty() {
        return None;
    }

    let total: u64 = values.iter().map(|v| u64::from(*v)).sum();

    Some(RatingStats {
        menu_id,
        average_rating: total as f64 / values.len() as f64,
        rating_count: values.len() as u64,
    })
}
