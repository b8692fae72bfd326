use uuid::Uuid;

pub struct RedisKey;

impl RedisKey {
    pub fn menu(id: Uuid) -> String {
        format!("menu:{id}")
    }

    /// Set of every known menu id.
    pub fn menus() -> &'static str {
        "menus"
    }

    pub fn stall(id: Uuid) -> String {
        format!("stall:{id}")
    }

    /// Set of every known stall id.
    pub fn stalls() -> &'static str {
        "stalls"
    }

    /// Set of menu ids owned by a stall.
    pub fn stall_menus(stall_id: Uuid) -> String {
        format!("stall:{stall_id}:menus")
    }

    /// Hash of user id -> rating (1..=5) for a menu. HSET gives the
    /// one-rating-per-user upsert.
    pub fn menu_ratings(menu_id: Uuid) -> String {
        format!("menu:{menu_id}:ratings")
    }

    pub fn menu_ratings_pattern() -> &'static str {
        "menu:*:ratings"
    }

    /// List of comment ids for a menu, in creation order.
    pub fn menu_comments(menu_id: Uuid) -> String {
        format!("menu:{menu_id}:comments")
    }

    pub fn comment(id: Uuid) -> String {
        format!("comment:{id}")
    }

    pub fn user(id: Uuid) -> String {
        format!("user:{id}")
    }

    pub fn extract_menu_id_from_ratings_key(key: &str) -> Option<Uuid> {
        let id = key.strip_prefix("menu:")?.strip_suffix(":ratings")?;
        Uuid::parse_str(id).ok()
    }
}
