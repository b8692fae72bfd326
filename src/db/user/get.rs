use crate::{
    db::checkout,
    errors::AppError,
    models::{User, redis::RedisKey},
    state::RedisClient,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Resolve display names for a batch of user ids. Unknown ids are simply
/// left out; callers fall back to the raw id string.
pub async fn get_display_names(
    user_ids: &[Uuid],
    redis: RedisClient,
) -> Result<HashMap<Uuid, String>, AppError> {
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut conn = checkout(&redis).await?;
    let mut names = HashMap::new();

    for user_id in user_ids {
        let json: Option<String> = redis::cmd("GET")
            .arg(RedisKey::user(*user_id))
            .query_async(&mut *conn)
            .await
            .map_err(AppError::RedisCommandError)?;

        if let Some(json) = json {
            let user: User = serde_json::from_str(&json)
                .map_err(|e| AppError::Deserialization(e.to_string()))?;
            names.insert(*user_id, user.display_name());
        }
    }

    Ok(names)
}
