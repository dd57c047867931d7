//! Pets Domain
//!
//! Pet records, their repository, and the HTTP surface for pet CRUD
//! (including the image-upload creation variant) and mock-pet generation.

pub mod error;
pub mod handlers;
pub mod mock;
pub mod models;
pub mod repository;

// Re-export commonly used types
pub use error::{PetError, PetResult};
pub use handlers::PetsApiDoc;
pub use models::{CreatePetRequest, Pet, UpdatePet};
pub use repository::PetRepository;
