//! Merge stage shared by the popularity and search selectors.
//!
//! Degradation policy lives here and only here: the menu fetch is the
//! primary join and fails the whole request, while missing stalls or an
//! unreachable comment store soften to "Unknown Stall" / empty threads.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use super::MenuAggregator;
use crate::errors::AppError;
use crate::models::{MenuItem, PopularMenu, RatingStats, Stall};

impl MenuAggregator {
    /// Join the selected menu ids with their stalls, rating stats, and
    /// comment trees. Output order mirrors `ids`; the only silent drop is an
    /// id whose menu record no longer exists.
    pub(super) async fn merge(
        &self,
        ids: &[Uuid],
        stats: Vec<RatingStats>,
    ) -> Result<Vec<PopularMenu>, AppError> {
        let fetched = self.menus.find_by_ids(ids).await?;

        let mut by_id: HashMap<Uuid, MenuItem> =
            fetched.into_iter().map(|m| (m.id, m)).collect();
        let menus: Vec<MenuItem> = ids.iter().filter_map(|id| by_id.remove(id)).collect();

        if menus.is_empty() {
            return Ok(Vec::new());
        }

        let stats_by_menu: HashMap<Uuid, RatingStats> =
            stats.into_iter().map(|s| (s.menu_id, s)).collect();

        let stall_ids: Vec<Uuid> = {
            let mut seen = HashSet::new();
            menus
                .iter()
                .map(|m| m.stall_id)
                .filter(|id| seen.insert(*id))
                .collect()
        };

        let stall_map: HashMap<Uuid, Stall> = match self.stalls.find_by_ids(&stall_ids).await {
            Ok(stalls) => stalls.into_iter().map(|s| (s.id, s)).collect(),
            Err(e) => {
                tracing::warn!("Stall lookup failed, degrading to placeholder names: {e}");
                HashMap::new()
            }
        };

        let stall_ratings = derive_stall_ratings(&menus, &stats_by_menu);

        let selected: Vec<Uuid> = menus.iter().map(|m| m.id).collect();
        let mut comment_trees = match self.comment_trees(&selected).await {
            Ok(trees) => trees,
            Err(e) => {
                tracing::warn!("Comment lookup failed, degrading to empty threads: {e}");
                HashMap::new()
            }
        };

        Ok(menus
            .into_iter()
            .map(|menu| {
                let stat = stats_by_menu.get(&menu.id);
                let stall = stall_map.get(&menu.stall_id);

                PopularMenu {
                    id: menu.id,
                    name: menu.name,
                    images: menu.images,
                    description: menu.description,
                    price: format!("LKR {:.2}", menu.price),
                    average_rating: stat.map_or(0.0, |s| s.average_rating),
                    rating_count: stat.map_or(0, |s| s.rating_count),
                    stall_name: stall
                        .map_or_else(|| "Unknown Stall".to_string(), |s| s.stall_name.clone()),
                    stall_overall_rating: stall_ratings
                        .get(&menu.stall_id)
                        .copied()
                        .unwrap_or(0.0),
                    comments: comment_trees.remove(&menu.id).unwrap_or_default(),
                }
            })
            .collect())
    }
}

/// Per-stall overall rating: the unweighted mean of `average_rating` over
/// that stall's menus *in the current selection* with a rating above zero,
/// rounded to 1 decimal. Recomputed per query, never stored.
fn derive_stall_ratings(
    menus: &[MenuItem],
    stats_by_menu: &HashMap<Uuid, RatingStats>,
) -> HashMap<Uuid, f64> {
    let mut totals: HashMap<Uuid, (f64, u32)> = HashMap::new();

    for menu in menus {
        if let Some(stat) = stats_by_menu.get(&menu.id) {
            if stat.average_rating > 0.0 {
                let entry = totals.entry(menu.stall_id).or_insert((0.0, 0));
                entry.0 += stat.average_rating;
                entry.1 += 1;
            }
        }
    }

    totals
        .into_iter()
        .map(|(stall_id, (total, count))| {
            let mean = total / f64::from(count);
            (stall_id, (mean * 10.0).round() / 10.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(id: Uuid, stall_id: Uuid) -> MenuItem {
        MenuItem {
            id,
            stall_id,
            name: "test".into(),
            description: String::new(),
            price: 100.0,
            images: Vec::new(),
        }
    }

    fn stat(menu_id: Uuid, average_rating: f64, rating_count: u64) -> RatingStats {
        RatingStats {
            menu_id,
            average_rating,
            rating_count,
        }
    }

    #[test]
    fn single_rated_menu_sets_stall_rating_to_its_average() {
        let stall_id = Uuid::new_v4();
        let m1 = Uuid::new_v4();
        let menus = vec![menu(m1, stall_id)];
        let stats = HashMap::from([(m1, stat(m1, 4.67, 3))]);

        let ratings = derive_stall_ratings(&menus, &stats);
        assert_eq!(ratings.get(&stall_id), Some(&4.7));
    }

    #[test]
    fn unrated_menus_are_excluded_from_the_stall_mean() {
        let stall_id = Uuid::new_v4();
        let m1 = Uuid::new_v4();
        let m2 = Uuid::new_v4();
        let menus = vec![menu(m1, stall_id), menu(m2, stall_id)];
        let stats = HashMap::from([(m1, stat(m1, 4.0, 2)), (m2, stat(m2, 0.0, 0))]);

        let ratings = derive_stall_ratings(&menus, &stats);
        assert_eq!(ratings.get(&stall_id), Some(&4.0));
    }

    #[test]
    fn stall_with_no_rated_menus_gets_no_entry() {
        let stall_id = Uuid::new_v4();
        let m1 = Uuid::new_v4();
        let menus = vec![menu(m1, stall_id)];

        let ratings = derive_stall_ratings(&menus, &HashMap::new());
        assert!(ratings.is_empty());
    }

    #[test]
    fn stall_mean_averages_only_its_own_selected_menus() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let m1 = Uuid::new_v4();
        let m2 = Uuid::new_v4();
        let m3 = Uuid::new_v4();
        let menus = vec![menu(m1, s1), menu(m2, s1), menu(m3, s2)];
        let stats = HashMap::from([
            (m1, stat(m1, 5.0, 4)),
            (m2, stat(m2, 4.0, 1)),
            (m3, stat(m3, 2.0, 2)),
        ]);

        let ratings = derive_stall_ratings(&menus, &stats);
        assert_eq!(ratings.get(&s1), Some(&4.5));
        assert_eq!(ratings.get(&s2), Some(&2.0));
    }
}
