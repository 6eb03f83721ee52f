use axum::http::StatusCode;
use sqlx::PgPool;
use tracing::instrument;

use wgedu_auth::create_access_token;
use wgedu_config::JwtConfig;
use wgedu_core::AppError;

use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::users::service::UserService;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct AuthService;

impl AuthService {
    /// Verifies the credentials and issues an access token.
    ///
    /// An unknown username and a wrong password produce the same 401 so the
    /// response does not reveal which accounts exist.
    #[instrument(skip(db, dto, jwt_config), fields(username = %dto.username))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = match UserService::find_by_username(db, &dto.username).await {
            Ok(user) => user,
            Err(e) if e.status == StatusCode::NOT_FOUND => {
                tracing::warn!("Login attempt for unknown username");
                return Err(AppError::unauthorized(INVALID_CREDENTIALS.to_string()));
            }
            Err(e) => return Err(e),
        };

        if !UserService::verify_credentials(&user, &dto.password)? {
            tracing::warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = create_access_token(user.id, user.role, jwt_config)?;
        tracing::info!(user_id = user.id, role = %user.role, "User logged in");

        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }
}
