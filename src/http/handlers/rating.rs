use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{models::RatingSummary, state::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateMenuPayload {
    pub user_id: Uuid,
    pub rating: u8,
}

pub async fn rate_menu_handler(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
    Json(payload): Json<RateMenuPayload>,
) -> Result<Json<RatingSummary>, (StatusCode, String)> {
    match state
        .aggregator
        .rate_menu(menu_id, payload.user_id, payload.rating)
        .await
    {
        Ok(summary) => {
            tracing::info!(
                "User {} rated menu {} with {}",
                payload.user_id,
                menu_id,
                payload.rating
            );
            Ok(Json(summary))
        }
        Err(err) => {
            tracing::error!("Error rating menu: {}", err);
            Err(err.to_response())
        }
    }
}

#[derive(Deserialize)]
pub struct MenuRatingParams {
    pub user_id: Option<Uuid>,
}

pub async fn get_menu_rating_handler(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
    Query(params): Query<MenuRatingParams>,
) -> Result<Json<RatingSummary>, (StatusCode, String)> {
    let summary = state
        .aggregator
        .menu_rating(menu_id, params.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving menu rating: {}", e);
            e.to_response()
        })?;

    Ok(Json(summary))
}
