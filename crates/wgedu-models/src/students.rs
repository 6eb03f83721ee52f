//! Student profile models and DTOs.
//!
//! A student is a `users` row with role `student` plus a 1:1 `students`
//! profile row. [`Student`] is the joined view returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Free-form class label, may be empty
    pub grade: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub username: String,
}

/// Creates the identity record and the profile together.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email, length(max = 255))]
    #[schema(example = "jane.doe@wg-edu.org")]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub grade: String,
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Overwrites every profile field. The password is only changed when a
/// non-empty value is supplied.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub grade: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl UpdateStudentDto {
    /// The replacement password, if one was actually given.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}
