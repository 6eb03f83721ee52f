//! # WG Edu Config
//!
//! Configuration structures loaded from environment variables (after
//! `dotenvy` has populated them from `.env`):
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`database`]: PostgreSQL connection and startup seeding
//! - [`server`]: listen address
//! - [`cors`]: allowed cross-origin callers
//!
//! Every struct has a `from_env()` constructor that falls back to a
//! development default when a variable is unset or unparsable.
//!
//! # Example
//!
//! ```ignore
//! use wgedu_config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

use std::str::FromStr;

/// Parses an optional raw value, falling back to `default` when it is
/// missing or does not parse.
pub(crate) fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok(), default)
}

pub(crate) fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(v) => matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_uses_value() {
        assert_eq!(parse_or(Some("42".to_string()), 7u32), 42);
        assert_eq!(parse_or(Some(" 42 ".to_string()), 7u32), 42);
    }

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or(None, 7u32), 7);
        assert_eq!(parse_or(Some("seven".to_string()), 7u32), 7);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true".to_string()), false));
        assert!(parse_flag(Some("1".to_string()), false));
        assert!(parse_flag(Some("YES".to_string()), false));
        assert!(!parse_flag(Some("false".to_string()), true));
        assert!(!parse_flag(Some("0".to_string()), true));
        assert!(parse_flag(None, true));
        assert!(!parse_flag(None, false));
    }
}
