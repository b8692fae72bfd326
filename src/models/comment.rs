use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted comment row. `parent_id = None` marks a top-level comment;
/// anything else is a reply to another comment on the same menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuComment {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Comment as served to clients: user id resolved to a display name and
/// replies nested under their parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub id: Uuid,
    pub user: String,
    pub text: String,
    pub replies: Vec<CommentNode>,
    pub created_at: DateTime<Utc>,
}
