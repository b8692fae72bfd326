use crate::{
    db::checkout,
    errors::AppError,
    models::{MenuComment, redis::RedisKey},
    state::RedisClient,
};

pub async fn insert_comment(comment: &MenuComment, redis: RedisClient) -> Result<(), AppError> {
    let mut conn = checkout(&redis).await?;

    let json =
        serde_json::to_string(comment).map_err(|e| AppError::Serialization(e.to_string()))?;

    let _: () = redis::cmd("SET")
        .arg(RedisKey::comment(comment.id))
        .arg(json)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    let _: () = redis::cmd("RPUSH")
        .arg(RedisKey::menu_comments(comment.menu_id))
        .arg(comment.id.to_string())
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
