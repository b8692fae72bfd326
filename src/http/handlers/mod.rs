pub mod comment;
pub mod menu;
pub mod rating;
pub mod stall;
pub mod user;

pub use comment::add_comment_handler;
pub use menu::{
    create_menu_handler, get_menu_handler, get_popular_menus_handler, get_stall_menus_handler,
};
pub use rating::{get_menu_rating_handler, rate_menu_handler};
pub use stall::create_stall_handler;
pub use user::create_user_handler;
