use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod doc;
pub mod health;
pub mod restaurants;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(chat::router())
        .nest("/users", users::router())
        .nest("/restaurants", restaurants::router())
        .nest("/cuisines", catalog::cuisines_router())
        .nest("/banners", catalog::banners_router())
}
