//! Role gates for route groups.
//!
//! Each gate resolves the caller first, so an anonymous request is always
//! answered with 401 and never reaches the role comparison.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};

use wgedu_auth::Role;
use wgedu_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Lets the request through only if the caller holds one of `allowed_roles`.
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/", get(handler))
///     .layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_roles(state, req, next, &[Role::Admin], "Admin access required"),
///     ));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: &[Role],
    denied_message: &str,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();
    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    check_any_role(&auth_user, allowed_roles, denied_message)?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

pub async fn require_admin(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, &[Role::Admin], "Admin access required").await
}

pub async fn require_teacher_or_admin(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(
        state,
        req,
        next,
        &[Role::Teacher, Role::Admin],
        "Teacher or admin access required",
    )
    .await
}

/// Checks the role inside a handler rather than as a layer.
pub fn check_any_role(
    auth_user: &AuthUser,
    allowed_roles: &[Role],
    denied_message: &str,
) -> Result<(), AppError> {
    if !allowed_roles.contains(&auth_user.role) {
        tracing::warn!(
            user_id = auth_user.user_id,
            role = %auth_user.role,
            "Access denied"
        );
        return Err(AppError::forbidden(denied_message.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn user(role: Role) -> AuthUser {
        AuthUser { user_id: 1, role }
    }

    #[test]
    fn test_admin_only() {
        assert!(check_any_role(&user(Role::Admin), &[Role::Admin], "no").is_ok());

        let err = check_any_role(&user(Role::Teacher), &[Role::Admin], "no").unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.error.to_string(), "no");
    }

    #[test]
    fn test_teacher_or_admin() {
        let allowed = [Role::Teacher, Role::Admin];
        assert!(check_any_role(&user(Role::Teacher), &allowed, "no").is_ok());
        assert!(check_any_role(&user(Role::Admin), &allowed, "no").is_ok());
        assert!(check_any_role(&user(Role::Student), &allowed, "no").is_err());
    }
}
