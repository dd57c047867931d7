use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::config::SessionConfig;

/// Session token time-to-live: 1 hour
pub const SESSION_TTL: i64 = 3600;

/// Claims carried by a session token.
///
/// This is also the payload returned by the `current` session endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionClaims {
    /// User id
    pub id: Uuid,
    /// Display name ("first last")
    pub name: String,
    /// User role
    pub role: String,
    /// User email
    pub email: String,
    /// Expiration time (unix seconds)
    pub exp: i64,
    /// Issued at (unix seconds)
    pub iat: i64,
}

/// Stateless session-token issuer/verifier (HS256)
#[derive(Clone)]
pub struct SessionAuth {
    secret: String,
}

impl SessionAuth {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Create a session token with a 1-hour expiry
    pub fn create_token(
        &self,
        id: Uuid,
        name: &str,
        role: &str,
        email: &str,
    ) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            id,
            name: name.to_string(),
            role: role.to_string(),
            email: email.to_string(),
            exp: (now + Duration::seconds(SESSION_TTL)).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify the token signature and expiry, returning its claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<SessionClaims> {
        let token_data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
