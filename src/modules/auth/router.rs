use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{login, protected};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Token introspection; mounted behind the authentication layer.
pub fn init_protected_router() -> Router<AppState> {
    Router::new().route("/protected", get(protected))
}
