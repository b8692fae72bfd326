use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{db::user::post::create_user, models::User, state::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<Json<User>, (StatusCode, String)> {
    match create_user(payload.name, payload.email, state.redis.clone()).await {
        Ok(user) => {
            tracing::info!("User {} created", user.id);
            Ok(Json(user))
        }
        Err(err) => {
            tracing::error!("Error creating user: {}", err);
            Err(err.to_response())
        }
    }
}
