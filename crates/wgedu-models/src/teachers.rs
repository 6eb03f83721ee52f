//! Teachers and subject assignment.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::subjects::Subject;

/// A teacher account with the subjects assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Teacher {
    pub id: i32,
    pub username: String,
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AssignSubjectDto {
    #[validate(range(min = 1, message = "subject_id must be a positive integer"))]
    pub subject_id: i32,
}
