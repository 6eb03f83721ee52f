use std::env;

use crate::env_or;

/// Fallback secret for local development only.
pub const DEFAULT_JWT_SECRET: &str = "wg-edu-dev-secret-change-in-production";

/// Tokens live for 24 hours unless overridden.
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            token_expiry: env_or("JWT_EXPIRY", DEFAULT_TOKEN_EXPIRY_SECS),
        }
    }

    pub fn is_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}
