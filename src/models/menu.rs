use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::comment::CommentNode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Uuid,
    pub stall_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Flat record served by `/menu/popular`: one menu with its own rating
/// stats, the owning stall's derived rating, and the menu's comment threads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularMenu {
    pub id: Uuid,
    pub name: String,
    pub images: Vec<String>,
    pub description: String,
    /// Display price, e.g. "LKR 450.00".
    pub price: String,
    pub average_rating: f64,
    pub rating_count: u64,
    pub stall_name: String,
    pub stall_overall_rating: f64,
    pub comments: Vec<CommentNode>,
}
