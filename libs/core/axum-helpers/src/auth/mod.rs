//! Session-cookie authentication.
//!
//! Signed tokens (HS256) carried in an HttpOnly cookie with a 1-hour expiry.
//! Verification is stateless: possession of a valid, unexpired token is the
//! whole session model.

mod config;
mod cookies;
mod jwt;

pub use config::SessionConfig;
pub use cookies::{clear_cookie, cookie_from_headers, extract_cookie_value, session_cookie};
pub use jwt::{SessionAuth, SessionClaims, SESSION_TTL};

/// Name of the primary session cookie
pub const SESSION_COOKIE: &str = "session_token";

/// Name of the cookie used by the unprotected login pair
pub const UNPROTECTED_COOKIE: &str = "unprotected_token";
