//! Application state management.
//!
//! The shared state passed to all route builders: configuration plus the
//! process-wide MongoDB client opened once at startup.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is inexpensive; the client shares its underlying connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
