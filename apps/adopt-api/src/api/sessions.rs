//! Sessions API routes
//!
//! Wires the session endpoints to HTTP routes.

use axum::Router;
use axum_helpers::SessionAuth;
use domain_users::{sessions, UserAdapter, UserRepository};

use crate::state::AppState;

/// Create the sessions router backed by the MongoDB adapter
pub fn router(state: &AppState) -> Router {
    let repository = UserRepository::new(UserAdapter::new(&state.db));
    let auth = SessionAuth::new(&state.config.session);

    sessions::router(repository, auth)
}
