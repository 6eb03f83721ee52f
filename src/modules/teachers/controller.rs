use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use wgedu_core::AppError;
use wgedu_models::MessageResponse;

use super::model::{AssignSubjectDto, Teacher};
use super::service::TeacherService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "Teachers with their subjects", body = Vec<Teacher>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - teachers and admins only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(State(state): State<AppState>) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = TeacherService::list_teachers(&state.db).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher found", body = Teacher),
        (status = 400, description = "Invalid teacher ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - teachers and admins only", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::find_teacher(&state.db, id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    post,
    path = "/api/teachers/{id}/subjects",
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    request_body = AssignSubjectDto,
    responses(
        (status = 200, description = "Subject assigned", body = MessageResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admins only", body = ErrorResponse),
        (status = 404, description = "Teacher or subject not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn assign_subject(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<AssignSubjectDto>,
) -> Result<Json<MessageResponse>, AppError> {
    TeacherService::assign_subject(&state.db, id, dto.subject_id).await?;
    Ok(Json(MessageResponse::new(
        "Subject assigned to teacher successfully",
    )))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}/subjects/{subject_id}",
    params(
        ("id" = i32, Path, description = "Teacher ID"),
        ("subject_id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject removed", body = MessageResponse),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admins only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn unassign_subject(
    State(state): State<AppState>,
    Path((id, subject_id)): Path<(i32, i32)>,
) -> Result<Json<MessageResponse>, AppError> {
    TeacherService::unassign_subject(&state.db, id, subject_id).await?;
    Ok(Json(MessageResponse::new(
        "Subject removed from teacher successfully",
    )))
}
