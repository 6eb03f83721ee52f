//! JWT claim structure for access tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::Role;

/// Payload carried by every access token.
///
/// The claims hold everything the authorization gate needs, so protected
/// requests are served without a database lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Identity record ID (subject claim)
    pub sub: String,
    /// Role of the identity at issuance
    pub role: Role,
    /// Expiration (Unix timestamp, seconds)
    pub exp: usize,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: usize,
}

impl Claims {
    /// Numeric identity ID, if the subject is well formed.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}
