//! Store traits consumed by the aggregation service.
//!
//! The Redis-backed implementations live in `db`; tests inject in-memory
//! fakes. None of these methods guarantee result ordering unless noted;
//! callers re-order by id where it matters.

use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{MenuComment, MenuItem, RatingStats, Stall};

#[async_trait]
pub trait MenuStore: Send + Sync {
    async fn find_by_id(&self, menu_id: Uuid) -> Result<Option<MenuItem>, AppError>;

    /// Ids with no backing record are silently skipped.
    async fn find_by_ids(&self, menu_ids: &[Uuid]) -> Result<Vec<MenuItem>, AppError>;

    async fn find_by_stalls(&self, stall_ids: &[Uuid]) -> Result<Vec<MenuItem>, AppError>;

    /// Case-insensitive substring match on the menu name. `term` is already
    /// trimmed and lower-cased by the caller.
    async fn search_by_name(&self, term: &str) -> Result<Vec<MenuItem>, AppError>;

    async fn all_menu_ids(&self) -> Result<Vec<Uuid>, AppError>;
}

#[async_trait]
pub trait StallStore: Send + Sync {
    async fn find_by_ids(&self, stall_ids: &[Uuid]) -> Result<Vec<Stall>, AppError>;

    async fn search_by_name(&self, term: &str) -> Result<Vec<Stall>, AppError>;
}

#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Last write wins per `(menu_id, user_id)`; a re-rating never adds a row.
    async fn upsert(&self, menu_id: Uuid, user_id: Uuid, rating: u8) -> Result<(), AppError>;

    /// Stats for every menu with at least one rating. Menus nobody has rated
    /// are absent; the aggregation service zero-fills them.
    async fn aggregate_all(&self) -> Result<Vec<RatingStats>, AppError>;

    async fn aggregate_for(&self, menu_ids: &[Uuid]) -> Result<Vec<RatingStats>, AppError>;

    async fn user_rating(&self, menu_id: Uuid, user_id: Uuid) -> Result<Option<u8>, AppError>;
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert(&self, comment: &MenuComment) -> Result<(), AppError>;

    /// All comments for the given menus, in creation order per menu.
    async fn find_by_menu_ids(&self, menu_ids: &[Uuid]) -> Result<Vec<MenuComment>, AppError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Display names for the resolvable subset of `user_ids`; unresolvable
    /// ids are simply absent from the map.
    async fn display_names(
        &self,
        user_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, String>, AppError>;
}
