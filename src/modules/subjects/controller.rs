use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use wgedu_core::AppError;

use super::model::{Grade, GroupedSubjects, Subject};
use super::service::SubjectService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/subjects",
    responses(
        (status = 200, description = "All subjects ordered by grade and name", body = Vec<Subject>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subjects(State(state): State<AppState>) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::list_all(&state.db).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/subjects/grouped",
    responses(
        (status = 200, description = "Subjects keyed by grade", body = std::collections::BTreeMap<String, Vec<Subject>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subjects_grouped(
    State(state): State<AppState>,
) -> Result<Json<GroupedSubjects>, AppError> {
    let grouped = SubjectService::list_grouped(&state.db).await?;
    Ok(Json(grouped))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{grade}",
    params(
        ("grade" = String, Path, description = "PIB, IB1 or IB2")
    ),
    responses(
        (status = 200, description = "Subjects of one grade ordered by name", body = Vec<Subject>),
        (status = 400, description = "Invalid grade", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subjects_by_grade(
    State(state): State<AppState>,
    Path(grade): Path<String>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let grade: Grade = grade.parse().map_err(AppError::bad_request)?;
    let subjects = SubjectService::list_by_grade(&state.db, grade).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/subjects/id/{id}",
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject found", body = Subject),
        (status = 400, description = "Invalid subject ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Subject>, AppError> {
    let subject = SubjectService::find_by_id(&state.db, id).await?;
    Ok(Json(subject))
}
