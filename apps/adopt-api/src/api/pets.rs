//! Pets API routes
//!
//! Wires the pets domain to HTTP routes.

use axum::Router;
use database::MongoAdapter;
use domain_pets::{handlers, Pet, PetRepository};

use crate::state::AppState;

/// Create the pets router backed by the MongoDB adapter
pub fn router(state: &AppState) -> Router {
    let repository = PetRepository::new(MongoAdapter::<Pet>::new(&state.db));

    handlers::router(repository, state.config.upload.clone())
}
