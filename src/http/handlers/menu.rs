use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::menu::{
        get::{get_menu_by_id, get_menus_by_stall},
        post::create_menu,
    },
    models::{MenuItem, PopularMenu},
    state::AppState,
};

#[derive(Deserialize)]
pub struct PopularMenuParams {
    pub query: Option<String>,
    // Kept as a string: a garbled limit means "no truncation", not a 400.
    pub limit: Option<String>,
}

pub async fn get_popular_menus_handler(
    State(state): State<AppState>,
    Query(params): Query<PopularMenuParams>,
) -> Result<Json<Vec<PopularMenu>>, (StatusCode, String)> {
    let limit = params.limit.as_deref().and_then(|l| l.parse::<usize>().ok());

    let result = match params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    {
        Some(query) => {
            state
                .aggregator
                .search_menus(query, limit.unwrap_or(10))
                .await
        }
        None => state.aggregator.get_popular_menus(limit).await,
    };

    match result {
        Ok(menus) => Ok(Json(menus)),
        Err(err) => {
            tracing::error!("Error aggregating popular menus: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_menu_handler(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
) -> Result<Json<MenuItem>, (StatusCode, String)> {
    let menu = get_menu_by_id(menu_id, state.redis.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving menu: {}", e);
            e.to_response()
        })?;

    match menu {
        Some(menu) => Ok(Json(menu)),
        None => Err((StatusCode::NOT_FOUND, "Menu not found".into())),
    }
}

pub async fn get_stall_menus_handler(
    State(state): State<AppState>,
    Path(stall_id): Path<Uuid>,
) -> Result<Json<Vec<MenuItem>>, (StatusCode, String)> {
    let menus = get_menus_by_stall(stall_id, state.redis.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving stall menus: {}", e);
            e.to_response()
        })?;

    Ok(Json(menus))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuPayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

pub async fn create_menu_handler(
    State(state): State<AppState>,
    Path(stall_id): Path<Uuid>,
    Json(payload): Json<CreateMenuPayload>,
) -> Result<Json<MenuItem>, (StatusCode, String)> {
    match create_menu(
        stall_id,
        payload.name,
        payload.description,
        payload.price,
        payload.images,
        state.redis.clone(),
    )
    .await
    {
        Ok(menu) => {
            tracing::info!("Menu {} created for stall {}", menu.id, stall_id);
            Ok(Json(menu))
        }
        Err(err) => {
            tracing::error!("Error creating menu: {}", err);
            Err(err.to_response())
        }
    }
}
