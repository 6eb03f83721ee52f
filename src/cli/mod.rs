//! Administrative commands shared by the `wgedu-cli` binary and startup.

pub mod seeder;

use sqlx::PgPool;

use wgedu_auth::Role;
use wgedu_core::AppError;
use wgedu_models::User;

use crate::modules::users::service::UserService;

/// Creates an admin account. Fails with 409 if the username is taken.
pub async fn create_admin(db: &PgPool, username: &str, password: &str) -> Result<User, AppError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Username and password are required"
        )));
    }

    UserService::create_user(db, username.trim(), password, Role::Admin).await
}
