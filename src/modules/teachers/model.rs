//! Teacher models.
//!
//! Re-exported from the `wgedu-models` crate, plus the row types used to
//! assemble a [`Teacher`] from two queries.

use sqlx::FromRow;

pub use wgedu_models::subjects::Subject;
pub use wgedu_models::teachers::{AssignSubjectDto, Teacher};

#[derive(Debug, Clone, FromRow)]
pub struct TeacherRow {
    pub id: i32,
    pub username: String,
}

/// One `teacher_subjects` link joined with its subject.
#[derive(Debug, Clone, FromRow)]
pub struct AssignedSubjectRow {
    pub teacher_id: i32,
    #[sqlx(flatten)]
    pub subject: Subject,
}
