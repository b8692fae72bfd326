pub mod comment;
pub mod menu;
pub mod rating;
pub mod redis;
pub mod stall;
pub mod user;

pub use comment::{CommentNode, MenuComment};
pub use menu::{MenuItem, PopularMenu};
pub use rating::{RatingStats, RatingSummary};
pub use stall::Stall;
pub use user::User;
