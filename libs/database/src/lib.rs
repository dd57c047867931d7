//! Database library providing the MongoDB connector and the generic
//! repository layer shared by all entity domains.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support (connector, health checks, adapter)
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - Everything
//!
//! # Examples
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//! ```

// Always available modules
pub mod common;

// Generic repository abstraction over document collections
#[cfg(feature = "mongodb")]
pub mod repository;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};

#[cfg(feature = "mongodb")]
pub use repository::{
    Entity, EntityAdapter, GenericRepository, MongoAdapter, RepositoryError, RepositoryResult,
};
