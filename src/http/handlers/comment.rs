use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{models::CommentNode, state::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentPayload {
    pub user_id: Uuid,
    pub text: String,
    pub parent_id: Option<Uuid>,
}

pub async fn add_comment_handler(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
    Json(payload): Json<AddCommentPayload>,
) -> Result<Json<CommentNode>, (StatusCode, String)> {
    match state
        .aggregator
        .add_comment(menu_id, payload.user_id, &payload.text, payload.parent_id)
        .await
    {
        Ok(comment) => {
            tracing::info!("User {} commented on menu {}", payload.user_id, menu_id);
            Ok(Json(comment))
        }
        Err(err) => {
            tracing::error!("Error adding comment: {}", err);
            Err(err.to_response())
        }
    }
}
