//! Student data models and DTOs.
//!
//! Re-exported from the `wgedu-models` crate.

pub use wgedu_models::students::{CreateStudentDto, Student, UpdateStudentDto};
