//! Menu aggregation service: popularity ranking, search, and the shared
//! merge pipeline that joins menus, stalls, ratings, and comment threads
//! into the flat records the frontend renders.

mod comments;
mod merge;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CommentNode, MenuComment, PopularMenu, RatingStats, RatingSummary};
use crate::stores::{CommentStore, MenuStore, RatingStore, StallStore, UserDirectory};

pub struct MenuAggregator {
    menus: Arc<dyn MenuStore>,
    stalls: Arc<dyn StallStore>,
    ratings: Arc<dyn RatingStore>,
    comments: Arc<dyn CommentStore>,
    users: Arc<dyn UserDirectory>,
}

impl MenuAggregator {
    pub fn new(
        menus: Arc<dyn MenuStore>,
        stalls: Arc<dyn StallStore>,
        ratings: Arc<dyn RatingStore>,
        comments: Arc<dyn CommentStore>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            menus,
            stalls,
            ratings,
            comments,
            users,
        }
    }

    /// Menus ranked by number of ratings received (not by average score).
    /// With no ratings anywhere, every known menu appears with zero stats,
    /// so the endpoint never goes empty just because nobody has rated yet.
    pub async fn get_popular_menus(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<PopularMenu>, AppError> {
        let mut stats = self.rounded(self.ratings.aggregate_all().await?);

        if stats.is_empty() {
            stats = self
                .menus
                .all_menu_ids()
                .await?
                .into_iter()
                .map(|menu_id| RatingStats {
                    menu_id,
                    average_rating: 0.0,
                    rating_count: 0,
                })
                .collect();
        }

        // Stable sort: ties keep the store-returned order.
        stats.sort_by(|a, b| b.rating_count.cmp(&a.rating_count));

        if let Some(limit) = limit {
            stats.truncate(limit);
        }

        if stats.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = stats.iter().map(|s| s.menu_id).collect();
        self.merge(&ids, stats).await
    }

    /// Union of menus matching `query` by their own name and menus belonging
    /// to stalls matching by name, deduplicated in discovery order. A blank
    /// query returns nothing without touching the stores.
    pub async fn search_menus(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<PopularMenu>, AppError> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let mut matched = self.menus.search_by_name(&term).await?;

        let matching_stalls = self.stalls.search_by_name(&term).await?;
        if !matching_stalls.is_empty() {
            let stall_ids: Vec<Uuid> = matching_stalls.iter().map(|s| s.id).collect();
            matched.extend(self.menus.find_by_stalls(&stall_ids).await?);
        }

        // First occurrence wins; a menu matching both by its own name and by
        // its stall's name appears exactly once.
        let mut seen = HashSet::new();
        let mut ids: Vec<Uuid> = Vec::new();
        for menu in &matched {
            if seen.insert(menu.id) {
                ids.push(menu.id);
            }
        }
        ids.truncate(limit);

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let stats = self.rounded(self.ratings.aggregate_for(&ids).await?);
        self.merge(&ids, stats).await
    }

    /// Upsert the caller's rating (1..=5) and return the menu's fresh stats.
    pub async fn rate_menu(
        &self,
        menu_id: Uuid,
        user_id: Uuid,
        rating: u8,
    ) -> Result<RatingSummary, AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".into(),
            ));
        }

        if self.menus.find_by_id(menu_id).await?.is_none() {
            return Err(AppError::NotFound("Menu not found".into()));
        }

        self.ratings.upsert(menu_id, user_id, rating).await?;
        self.menu_rating(menu_id, Some(user_id)).await
    }

    pub async fn menu_rating(
        &self,
        menu_id: Uuid,
        user_id: Option<Uuid>,
    ) -> Result<RatingSummary, AppError> {
        let stats = self.rounded(self.ratings.aggregate_for(&[menu_id]).await?);
        let stat = stats.into_iter().find(|s| s.menu_id == menu_id);

        let user_rating = match user_id {
            Some(user_id) => self.ratings.user_rating(menu_id, user_id).await?,
            None => None,
        };

        Ok(RatingSummary {
            average_rating: stat.as_ref().map_or(0.0, |s| s.average_rating),
            rating_count: stat.map_or(0, |s| s.rating_count),
            user_rating,
        })
    }

    /// Post a comment or a reply. Returns the new node with the author's
    /// display name resolved and an empty `replies` list.
    pub async fn add_comment(
        &self,
        menu_id: Uuid,
        user_id: Uuid,
        text: &str,
        parent_id: Option<Uuid>,
    ) -> Result<CommentNode, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest("Comment text must not be empty".into()));
        }

        if self.menus.find_by_id(menu_id).await?.is_none() {
            return Err(AppError::NotFound("Menu not found".into()));
        }

        let comment = MenuComment {
            id: Uuid::new_v4(),
            menu_id,
            user_id,
            text: text.to_string(),
            parent_id,
            created_at: Utc::now(),
        };

        self.comments.insert(&comment).await?;

        let names = self
            .users
            .display_names(&[user_id])
            .await
            .unwrap_or_default();

        Ok(CommentNode {
            id: comment.id,
            user: names
                .get(&user_id)
                .cloned()
                .unwrap_or_else(|| user_id.to_string()),
            text: comment.text,
            replies: Vec::new(),
            created_at: comment.created_at,
        })
    }

    fn rounded(&self, stats: Vec<RatingStats>) -> Vec<RatingStats> {
        stats.into_iter().map(RatingStats::rounded).collect()
    }
}
