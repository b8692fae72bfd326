use crate::{
    db::checkout,
    errors::AppError,
    models::{Stall, redis::RedisKey},
    state::RedisClient,
};
use uuid::Uuid;

pub async fn create_stall(
    profile_id: Uuid,
    stall_name: String,
    stall_description: String,
    stall_image: Vec<String>,
    redis: RedisClient,
) -> Result<Stall, AppError> {
    let stall = Stall {
        id: Uuid::new_v4(),
        profile_id,
        stall_name,
        stall_description,
        stall_image,
    };

    insert_stall(&stall, redis).await?;
    Ok(stall)
}

pub async fn insert_stall(stall: &Stall, redis: RedisClient) -> Result<(), AppError> {
    let mut conn = checkout(&redis).await?;

    let json =
        serde_json::to_string(stall).map_err(|e| AppError::Serialization(e.to_string()))?;

    let _: () = redis::cmd("SET")
        .arg(RedisKey::stall(stall.id))
        .arg(json)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    let _: () = redis::cmd("SADD")
        .arg(RedisKey::stalls())
        .arg(stall.id.to_string())
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
