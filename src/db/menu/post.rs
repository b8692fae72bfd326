use crate::{
    db::checkout,
    errors::AppError,
    models::{MenuItem, redis::RedisKey},
    state::RedisClient,
};
use uuid::Uuid;

pub async fn create_menu(
    stall_id: Uuid,
    name: String,
    description: String,
    price: f64,
    images: Vec<String>,
    redis: RedisClient,
) -> Result<MenuItem, AppError> {
    {
        let mut conn = checkout(&redis).await?;
        let stall_exists: bool = redis::cmd("EXISTS")
            .arg(RedisKey::stall(stall_id))
            .query_async(&mut *conn)
            .await
            .map_err(AppError::RedisCommandError)?;

        if !stall_exists {
            return Err(AppError::NotFound("Stall not found".into()));
        }
    }

    let menu = MenuItem {
        id: Uuid::new_v4(),
        stall_id,
        name,
        description,
        price,
        images,
    };

    insert_menu(&menu, redis).await?;
    Ok(menu)
}

pub async fn insert_menu(menu: &MenuItem, redis: RedisClient) -> Result<(), AppError> {
    let mut conn = checkout(&redis).await?;

    let json =
        serde_json::to_string(menu).map_err(|e| AppError::Serialization(e.to_string()))?;

    let _: () = redis::cmd("SET")
        .arg(RedisKey::menu(menu.id))
        .arg(json)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    let _: () = redis::cmd("SADD")
        .arg(RedisKey::menus())
        .arg(menu.id.to_string())
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    let _: () = redis::cmd("SADD")
        .arg(RedisKey::stall_menus(menu.stall_id))
        .arg(menu.id.to_string())
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
