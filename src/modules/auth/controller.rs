use axum::Json;
use axum::extract::State;
use tracing::instrument;
use utoipa::ToSchema;

use wgedu_core::AppError;

use super::model::{LoginRequest, LoginResponse, ProtectedResponse};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Login and receive a JWT
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Echo the identity carried by the caller's token
#[utoipa::path(
    get,
    path = "/api/protected",
    responses(
        (status = 200, description = "Token is valid", body = ProtectedResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument]
pub async fn protected(auth_user: AuthUser) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "Protected data accessed successfully".to_string(),
        user_id: auth_user.user_id,
        role: auth_user.role,
    })
}
