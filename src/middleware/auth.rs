use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use wgedu_auth::{Claims, Role, verify_token};
use wgedu_config::JwtConfig;
use wgedu_core::AppError;

use crate::state::AppState;

/// The caller identified by a validated bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub role: Role,
}

impl AuthUser {
    pub fn from_claims(claims: &Claims) -> Result<Self, AppError> {
        let user_id = claims
            .user_id()
            .ok_or_else(|| AppError::unauthorized("Invalid token claims".to_string()))?;

        Ok(Self {
            user_id,
            role: claims.role,
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Authorization header required".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthorized("Invalid token format".to_string()))
}

/// Validates the `Authorization` header against `jwt_config`.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers)?;
    let claims = verify_token(token, jwt_config)?;
    AuthUser::from_claims(&claims)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(*auth_user);
        }

        authenticate(&parts.headers, &state.jwt_config)
    }
}

/// Rejects the request with 401 unless it carries a valid token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state.jwt_config)?;
    tracing::debug!(user_id = auth_user.user_id, role = %auth_user.role, "Authenticated request");
    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}
