use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        add_comment_handler, create_menu_handler, create_stall_handler, create_user_handler,
        get_menu_handler, get_menu_rating_handler, get_popular_menus_handler,
        get_stall_menus_handler, rate_menu_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/menu/popular", get(get_popular_menus_handler))
        .route("/menu/{menu_id}", get(get_menu_handler))
        .route(
            "/menu/{menu_id}/rating",
            post(rate_menu_handler).get(get_menu_rating_handler),
        )
        .route("/menu/{menu_id}/comments", post(add_comment_handler))
        .route("/stall", post(create_stall_handler))
        .route(
            "/stall/{stall_id}/menu",
            post(create_menu_handler).get(get_stall_menus_handler),
        )
        .route("/user", post(create_user_handler))
        .with_state(state)
}
