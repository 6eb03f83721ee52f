//! JWT issuance and validation.
//!
//! Tokens are signed with HS256 over the process-wide secret in
//! [`JwtConfig`]. The `_at` variants take the current instant explicitly so
//! expiry can be checked against a fixed clock.
//!
//! Expiry is enforced here rather than by `jsonwebtoken`, whose default
//! validation allows 60 seconds of leeway. A token is rejected as soon as
//! `now >= exp`.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use wgedu_config::JwtConfig;
use wgedu_core::AppError;

use crate::claims::Claims;
use crate::role::Role;

const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Issues an access token for `user_id` with `role`, valid from now.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    user_id: i32,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_access_token_at(user_id, role, Utc::now(), jwt_config)
}

/// Issues an access token as if the current time were `now`.
pub fn create_access_token_at(
    user_id: i32,
    role: Role,
    now: DateTime<Utc>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let iat = now.timestamp().max(0) as usize;
    let exp = iat + jwt_config.token_expiry.max(0) as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp,
        iat,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies a token against the current time and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature does not match, the token
/// is malformed, or it has expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    verify_token_at(token, Utc::now(), jwt_config)
}

/// Verifies a token as if the current time were `now`.
pub fn verify_token_at(
    token: &str,
    now: DateTime<Utc>,
    jwt_config: &JwtConfig,
) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(INVALID_TOKEN_MESSAGE.to_string()))?;

    if now.timestamp() >= claims.exp as i64 {
        return Err(AppError::unauthorized(INVALID_TOKEN_MESSAGE.to_string()));
    }

    Ok(claims)
}
