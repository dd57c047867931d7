//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web
//! applications.
//!
//! ## Modules
//!
//! - **[`envelope`]**: the uniform `{status, payload|message|error}` response shape
//! - **[`errors`]**: [`AppError`] mapping domain failures to envelope responses
//! - **[`extractors`]**: custom extractors (UUID path parameters)
//! - **[`auth`]**: session-cookie authentication with signed tokens
//! - **[`server`]**: router composition, docs UIs, graceful shutdown
//! - **[`health`]**: liveness endpoint

pub mod auth;
pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;
pub mod shutdown;

// Re-export auth types
pub use auth::{
    clear_cookie, cookie_from_headers, extract_cookie_value, session_cookie, SessionAuth,
    SessionClaims, SessionConfig, SESSION_COOKIE, SESSION_TTL, UNPROTECTED_COOKIE,
};

// Re-export server types
pub use server::{create_app, create_production_app, create_router};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};

// Re-export error and envelope types
pub use envelope::{ErrorBody, Message, Payload};
pub use errors::AppError;

// Re-export extractors
pub use extractors::UuidPath;

// Re-export health types
pub use health::{health_router, HealthResponse};
