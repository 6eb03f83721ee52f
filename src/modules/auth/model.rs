//! Authentication payloads.
//!
//! Re-exported from the `wgedu-models` crate.

pub use wgedu_auth::Claims;
pub use wgedu_models::users::{LoginRequest, LoginResponse, MessageResponse, ProtectedResponse};
