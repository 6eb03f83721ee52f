pub mod auth;
pub mod health;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;
