use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-menu rating aggregate. `rating_count` counts distinct raters; a user
/// re-rating a menu overwrites their previous value rather than adding one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingStats {
    pub menu_id: Uuid,
    pub average_rating: f64,
    pub rating_count: u64,
}

impl RatingStats {
    /// Average pinned to 2 decimals so DTOs don't leak full float precision.
    pub fn rounded(mut self) -> Self {
        self.average_rating = (self.average_rating * 100.0).round() / 100.0;
        self
    }
}

/// Single-menu rating view, optionally including the caller's own rating.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub average_rating: f64,
    pub rating_count: u64,
    pub user_rating: Option<u8>,
}
