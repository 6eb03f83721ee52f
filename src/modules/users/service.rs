use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use wgedu_auth::Role;
use wgedu_core::{AppError, hash_password, verify_password};

use crate::modules::users::model::{User, UserWithPassword};

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn find_by_username(db: &PgPool, username: &str) -> Result<UserWithPassword, AppError> {
        sqlx::query_as::<_, UserWithPassword>(
            r#"
            SELECT id, username, password, role, date_created
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by username")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }

    /// Inserts an identity record with a freshly hashed password.
    #[instrument(skip(db, password))]
    pub async fn create_user(
        db: &PgPool,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AppError> {
        let hashed_password = hash_password(password)?;

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, role, date_created
            "#,
        )
        .bind(username)
        .bind(&hashed_password)
        .bind(role.as_str())
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow::anyhow!("Username already exists"));
            }
            AppError::database(anyhow::Error::from(e).context("Failed to insert user"))
        })
    }

    /// Checks a presented password against the stored bcrypt hash.
    pub fn verify_credentials(user: &UserWithPassword, password: &str) -> Result<bool, AppError> {
        verify_password(password, &user.password)
    }
}
