// crates/profile/src/infrastructure/api/http/router.rs

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use crate::infrastructure::api::http::handlers;
use crate::infrastructure::api::http::AppState;

/// Les segments littéraux (`/search`, `/mutual-friends`) priment sur la
/// capture `/:username` quel que soit l'ordre de déclaration.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/users",
            post(handlers::add_user).get(handlers::get_all_users),
        )
        .route("/api/users/search", get(handlers::search_users))
        .route(
            "/api/users/mutual-friends/:username",
            get(handlers::get_mutual_friends),
        )
        .route(
            "/api/users/:username",
            axum::routing::delete(handlers::delete_user).put(handlers::update_user),
        )
        .with_state(state)
}
