use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::require_auth;
use crate::middleware::role::require_admin;
use crate::modules::auth::init_auth_router;
use crate::modules::auth::router::init_protected_router;
use crate::modules::health::init_health_router;
use crate::modules::students::init_students_router;
use crate::modules::subjects::init_subjects_router;
use crate::modules::teachers::init_teachers_router;
use crate::state::AppState;
use wgedu_config::CorsConfig;

pub fn init_router(state: AppState) -> Router {
    // Every route in here requires a valid token; role gates sit inside.
    let protected = Router::new()
        .merge(init_protected_router())
        .nest("/subjects", init_subjects_router())
        .nest("/teachers", init_teachers_router(&state))
        .nest(
            "/admin/students",
            init_students_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .merge(init_health_router())
                .merge(init_auth_router())
                .merge(protected),
        )
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any() {
        return layer.allow_origin(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(allowed_origins).allow_credentials(true)
}
