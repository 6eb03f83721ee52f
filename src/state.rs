use sqlx::PgPool;
use wgedu_config::{CorsConfig, JwtConfig};

/// Shared by every handler. Cloning is cheap: the pool is reference counted.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            db,
            jwt_config,
            cors_config,
        }
    }
}
