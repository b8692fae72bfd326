use crate::{
    db::checkout,
    errors::AppError,
    models::{MenuComment, redis::RedisKey},
    state::RedisClient,
};
use uuid::Uuid;

/// All comments for the given menus. The per-menu comment list is appended
/// to at posting time, so LRANGE order is creation order.
pub async fn get_comments_by_menu_ids(
    menu_ids: &[Uuid],
    redis: RedisClient,
) -> Result<Vec<MenuComment>, AppError> {
    if menu_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut conn = checkout(&redis).await?;
    let mut comments = Vec::new();

    for menu_id in menu_ids {
        let comment_ids: Vec<String> = redis::cmd("LRANGE")
            .arg(RedisKey::menu_comments(*menu_id))
            .arg(0)
            .arg(-1)
            .query_async(&mut *conn)
            .await
            .map_err(AppError::RedisCommandError)?;

        for comment_id in comment_ids {
            let Ok(comment_id) = Uuid::parse_str(&comment_id) else {
                continue;
            };

            let json: Option<String> = redis::cmd("GET")
                .arg(RedisKey::comment(comment_id))
                .query_async(&mut *conn)
                .await
                .map_err(AppError::RedisCommandError)?;

            if let Some(json) = json {
                let comment: MenuComment = serde_json::from_str(&json)
                    .map_err(|e| AppError::Deserialization(e.to_string()))?;
                comments.push(comment);
            }
        }
    }

    Ok(comments)
}
