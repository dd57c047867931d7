//! Users API routes
//!
//! Wires the users domain to HTTP routes.

use axum::Router;
use domain_users::{handlers, UserAdapter, UserRepository};

use crate::state::AppState;

/// Create the users router backed by the MongoDB adapter
pub fn router(state: &AppState) -> Router {
    let repository = UserRepository::new(UserAdapter::new(&state.db));

    handlers::router(repository, state.config.upload.clone())
}
