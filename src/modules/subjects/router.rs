use axum::{Router, routing::get};

use super::controller::{get_subject, get_subjects, get_subjects_by_grade, get_subjects_grouped};
use crate::state::AppState;

pub fn init_subjects_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_subjects))
        .route("/grouped", get(get_subjects_grouped))
        .route("/id/{id}", get(get_subject))
        .route("/{grade}", get(get_subjects_by_grade))
}
