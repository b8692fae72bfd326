use crate::{
    db::checkout,
    errors::AppError,
    models::{User, redis::RedisKey},
    state::RedisClient,
};
use uuid::Uuid;

pub async fn create_user(
    name: Option<String>,
    email: Option<String>,
    redis: RedisClient,
) -> Result<User, AppError> {
    let user = User {
        id: Uuid::new_v4(),
        name,
        email,
    };

    insert_user(&user, redis).await?;
    Ok(user)
}

pub async fn insert_user(user: &User, redis: RedisClient) -> Result<(), AppError> {
    let mut conn = checkout(&redis).await?;

    let json =
        serde_json::to_string(user).map_err(|e| AppError::Serialization(e.to_string()))?;

    let _: () = redis::cmd("SET")
        .arg(RedisKey::user(user.id))
        .arg(json)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
