//! Adoptions Domain
//!
//! Adoption records, their repository, and the HTTP surface including the
//! adoption workflow — the one operation spanning users, pets and
//! adoptions.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

// Re-export commonly used types
pub use error::{AdoptionError, AdoptionResult};
pub use handlers::AdoptionsApiDoc;
pub use models::Adoption;
pub use repository::AdoptionRepository;
