//! # WG Edu Core
//!
//! Foundational types shared across the WG Edu API crates:
//!
//! - [`errors`]: the [`AppError`] type and its HTTP response mapping
//! - [`password`]: bcrypt hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use wgedu_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("wg_123")?;
//! if !verify_password("wg_123", &hash)? {
//!     return Err(AppError::unauthorized("Invalid username or password".to_string()));
//! }
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, verify_password};
