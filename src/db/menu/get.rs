use crate::{
    db::checkout,
    errors::AppError,
    models::{MenuItem, redis::RedisKey},
    state::RedisClient,
};
use uuid::Uuid;

pub async fn get_menu_by_id(
    menu_id: Uuid,
    redis: RedisClient,
) -> Result<Option<MenuItem>, AppError> {
    let mut conn = checkout(&redis).await?;

    let json: Option<String> = redis::cmd("GET")
        .arg(RedisKey::menu(menu_id))
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    match json {
        Some(json) => {
            let menu: MenuItem = serde_json::from_str(&json)
                .map_err(|e| AppError::Deserialization(e.to_string()))?;
            Ok(Some(menu))
        }
        None => Ok(None),
    }
}

/// Fetch a batch of menus. Ids without a backing record are skipped; any
/// re-ordering is left to the caller.
pub async fn get_menus_by_ids(
    menu_ids: &[Uuid],
    redis: RedisClient,
) -> Result<Vec<MenuItem>, AppError> {
    if menu_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut conn = checkout(&redis).await?;
    let mut menus = Vec::new();

    for menu_id in menu_ids {
        let json: Option<String> = redis::cmd("GET")
            .arg(RedisKey::menu(*menu_id))
            .query_async(&mut *conn)
            .await
            .map_err(AppError::RedisCommandError)?;

        if let Some(json) = json {
            let menu: MenuItem = serde_json::from_str(&json)
                .map_err(|e| AppError::Deserialization(e.to_string()))?;
            menus.push(menu);
        } else {
            tracing::warn!("Menu {} is indexed but has no record", menu_id);
        }
    }

    Ok(menus)
}

pub async fn get_menus_by_stall(
    stall_id: Uuid,
    redis: RedisClient,
) -> Result<Vec<MenuItem>, AppError> {
    let mut conn = checkout(&redis).await?;

    let ids: Vec<String> = redis::cmd("SMEMBERS")
        .arg(RedisKey::stall_menus(stall_id))
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;
    drop(conn);

    let menu_ids: Vec<Uuid> = ids.iter().filter_map(|id| Uuid::parse_str(id).ok()).collect();

    get_menus_by_ids(&menu_ids, redis).await
}

pub async fn get_menus_by_stalls(
    stall_ids: &[Uuid],
    redis: RedisClient,
) -> Result<Vec<MenuItem>, AppError> {
    let mut menus = Vec::new();

    for stall_id in stall_ids {
        menus.extend(get_menus_by_stall(*stall_id, redis.clone()).await?);
    }

    Ok(menus)
}

/// Case-insensitive substring scan over all menu names. `term` must already
/// be trimmed and lower-cased.
pub async fn search_menus_by_name(
    term: &str,
    redis: RedisClient,
) -> Result<Vec<MenuItem>, AppError> {
    let menu_ids = get_all_menu_ids(redis.clone()).await?;
    let menus = get_menus_by_ids(&menu_ids, redis).await?;

    Ok(menus
        .into_iter()
        .filter(|m| m.name.to_lowercase().contains(term))
        .collect())
}

pub async fn get_all_menu_ids(redis: RedisClient) -> Result<Vec<Uuid>, AppError> {
    let mut conn = checkout(&redis).await?;

    let ids: Vec<String> = redis::cmd("SMEMBERS")
        .arg(RedisKey::menus())
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(ids.iter().filter_map(|id| Uuid::parse_str(id).ok()).collect())
}
