//! # WG Edu Models
//!
//! Domain models and DTOs for the WG Edu API.
//!
//! # Modules
//!
//! - [`users`]: identity records and login payloads
//! - [`subjects`]: the per-grade subject catalog
//! - [`teachers`]: teachers with their assigned subjects
//! - [`students`]: student profiles and their create/update DTOs

pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use students::{CreateStudentDto, Student, UpdateStudentDto};
pub use subjects::{Grade, ParseGradeError, Subject};
pub use teachers::{AssignSubjectDto, Teacher};
pub use users::{
    LoginRequest, LoginResponse, MessageResponse, ProtectedResponse, User, UserWithPassword,
};
