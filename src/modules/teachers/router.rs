use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::controller::{assign_subject, get_teacher, get_teachers, unassign_subject};
use crate::middleware::role::{require_admin, require_teacher_or_admin};
use crate::state::AppState;

/// Reads are open to teachers and admins; assignment changes need an admin.
pub fn init_teachers_router(state: &AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/{id}/subjects", post(assign_subject))
        .route("/{id}/subjects/{subject_id}", delete(unassign_subject))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/", get(get_teachers))
        .route("/{id}", get(get_teacher))
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_teacher_or_admin,
        ))
}
