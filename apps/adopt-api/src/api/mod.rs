//! API routes module
//!
//! Composes the domain routers into the application's HTTP surface.

pub mod adoptions;
pub mod health;
pub mod mocks;
pub mod pets;
pub mod sessions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/users", users::router(state))
        .nest("/pets", pets::router(state))
        .nest("/adoptions", adoptions::router(state))
        .nest("/sessions", sessions::router(state))
        .nest("/mocks", mocks::router(state))
        .merge(health::router(state.clone()))
}
