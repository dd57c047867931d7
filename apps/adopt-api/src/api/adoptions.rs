//! Adoptions API routes
//!
//! Wires the adoptions domain to HTTP routes. The adoption workflow spans
//! three entities, so this router receives all three repositories.

use axum::Router;
use database::MongoAdapter;
use domain_adoptions::{handlers, Adoption, AdoptionRepository};
use domain_pets::{Pet, PetRepository};
use domain_users::{UserAdapter, UserRepository};

use crate::state::AppState;

/// Create the adoptions router backed by the MongoDB adapters
pub fn router(state: &AppState) -> Router {
    let users = UserRepository::new(UserAdapter::new(&state.db));
    let pets = PetRepository::new(MongoAdapter::<Pet>::new(&state.db));
    let adoptions = AdoptionRepository::new(MongoAdapter::<Adoption>::new(&state.db));

    handlers::router(users, pets, adoptions)
}
