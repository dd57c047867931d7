use core_config::{env_or_default, ConfigError, FromEnv};

/// Configuration for session-token signing
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// HMAC secret for HS256 signatures
    pub secret: String,
}

impl SessionConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl FromEnv for SessionConfig {
    /// Reads SESSION_SECRET, with an insecure local-dev default
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_or_default("SESSION_SECRET", "dev-session-secret");

        if secret == "dev-session-secret" {
            tracing::warn!("SESSION_SECRET not set, using insecure development default");
        }

        Ok(Self { secret })
    }
}
