use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use crate::{db::stall::post::create_stall, models::Stall, state::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStallPayload {
    pub profile_id: Uuid,
    pub stall_name: String,
    #[serde(default)]
    pub stall_description: String,
    #[serde(default)]
    pub stall_image: Vec<String>,
}

pub async fn create_stall_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateStallPayload>,
) -> Result<Json<Stall>, (StatusCode, String)> {
    match create_stall(
        payload.profile_id,
        payload.stall_name,
        payload.stall_description,
        payload.stall_image,
        state.redis.clone(),
    )
    .await
    {
        Ok(stall) => {
            tracing::info!("Stall {} created", stall.id);
            Ok(Json(stall))
        }
        Err(err) => {
            tracing::error!("Error creating stall: {}", err);
            Err(err.to_response())
        }
    }
}
