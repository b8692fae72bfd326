use crate::{
    db::checkout,
    errors::AppError,
    models::{Stall, redis::RedisKey},
    state::RedisClient,
};
use uuid::Uuid;

pub async fn get_stalls_by_ids(
    stall_ids: &[Uuid],
    redis: RedisClient,
) -> Result<Vec<Stall>, AppError> {
    if stall_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut conn = checkout(&redis).await?;
    let mut stalls = Vec::new();

    for stall_id in stall_ids {
        let json: Option<String> = redis::cmd("GET")
            .arg(RedisKey::stall(*stall_id))
            .query_async(&mut *conn)
            .await
            .map_err(AppError::RedisCommandError)?;

        if let Some(json) = json {
            let stall: Stall = serde_json::from_str(&json)
                .map_err(|e| AppError::Deserialization(e.to_string()))?;
            stalls.push(stall);
        }
    }

    Ok(stalls)
}

/// Case-insensitive substring scan over all stall names. `term` must already
/// be trimmed and lower-cased.
pub async fn search_stalls_by_name(
    term: &str,
    redis: RedisClient,
) -> Result<Vec<Stall>, AppError> {
    let mut conn = checkout(&redis).await?;

    let ids: Vec<String> = redis::cmd("SMEMBERS")
        .arg(RedisKey::stalls())
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;
    drop(conn);

    let stall_ids: Vec<Uuid> = ids.iter().filter_map(|id| Uuid::parse_str(id).ok()).collect();
    let stalls = get_stalls_by_ids(&stall_ids, redis).await?;

    Ok(stalls
        .into_iter()
        .filter(|s| s.stall_name.to_lowercase().contains(term))
        .collect())
}
