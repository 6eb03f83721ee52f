//! Authentication and authorization for protected routes.
//!
//! # Modules
//!
//! - [`auth`]: bearer token validation and the [`auth::AuthUser`] extractor
//! - [`role`]: role gates layered onto route groups
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::require_auth`] validates the token and stores an
//!    [`auth::AuthUser`] in the request extensions (401 on failure)
//! 3. A role gate such as [`role::require_admin`] checks the role (403)
//! 4. The handler runs
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware};
//! use crate::middleware::role::require_admin;
//!
//! let admin_routes = Router::new()
//!     .route("/", get(handler))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
//! ```

pub mod auth;
pub mod role;
