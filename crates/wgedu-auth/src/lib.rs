//! # WG Edu Auth
//!
//! Identity roles and the token service.
//!
//! - [`role`]: the closed set of account roles
//! - [`claims`]: the signed token payload
//! - [`jwt`]: token issuance and validation
//!
//! Tokens are HS256 JWTs signed with the secret held in
//! [`wgedu_config::JwtConfig`]. Validation is stateless: there is no
//! revocation list, so a token stays valid until it expires.
//!
//! # Example
//!
//! ```ignore
//! use wgedu_auth::{Role, create_access_token, verify_token};
//! use wgedu_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(42, Role::Teacher, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, Role::Teacher);
//! ```

pub mod claims;
pub mod jwt;
pub mod role;

pub use claims::Claims;
pub use jwt::{create_access_token, create_access_token_at, verify_token, verify_token_at};
pub use role::{ParseRoleError, Role};
