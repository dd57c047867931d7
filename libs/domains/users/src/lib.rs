//! Users Domain
//!
//! User records, their repository, and the HTTP surface for user CRUD,
//! document uploads and session-cookie authentication.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │  Handlers / Sessions     │  ← HTTP endpoints, validation, status codes
//! └────────────┬─────────────┘
//!              │
//! ┌────────────▼─────────────┐
//! │  UserRepository          │  ← entity-specific lookups over the façade
//! └────────────┬─────────────┘
//!              │
//! ┌────────────▼─────────────┐
//! │  UserAdapter             │  ← MongoAdapter + documents append
//! └──────────────────────────┘
//! ```

pub mod adapter;
pub mod error;
pub mod handlers;
pub mod mock;
pub mod models;
pub mod password;
pub mod repository;
pub mod sessions;

// Re-export commonly used types
pub use adapter::UserAdapter;
pub use error::{UserError, UserResult};
pub use handlers::UsersApiDoc;
pub use models::{
    CreateUserRequest, PetRef, UpdateUser, User, UserDocument, UserResponse,
};
pub use repository::UserRepository;
pub use sessions::SessionsApiDoc;
