//! Identity records and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use wgedu_auth::Role;

/// A login-capable account. The password hash is never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub date_created: DateTime<Utc>,
}

/// Row used only for credential checks.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithPassword {
    pub id: i32,
    pub username: String,
    pub password: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub date_created: DateTime<Utc>,
}

impl From<UserWithPassword> for User {
    fn from(row: UserWithPassword) -> Self {
        Self {
            id: row.id,
            username: row.username,
            role: row.role,
            date_created: row.date_created,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "test_admin")]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "test_admin")]
    pub password: String,
}

/// Successful login: a signed token plus the account it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Echo of the authenticated caller's claims.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProtectedResponse {
    pub message: String,
    pub user_id: i32,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_both_fields() {
        let request = LoginRequest {
            username: String::new(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());

        let request = LoginRequest {
            username: "wg".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());

        let request = LoginRequest {
            username: "wg".to_string(),
            password: "wg_123".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_user_serialization_omits_password() {
        let row = UserWithPassword {
            id: 1,
            username: "test_admin".to_string(),
            password: "$2b$12$hash".to_string(),
            role: Role::Admin,
            date_created: Utc::now(),
        };
        let json = serde_json::to_value(User::from(row)).unwrap();
        assert_eq!(json["username"], "test_admin");
        assert_eq!(json["role"], "admin");
        assert!(json.get("password").is_none());
    }
}
