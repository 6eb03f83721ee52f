use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use wgedu::cli::seeder::ensure_seed_data;
use wgedu::logging::init_tracing;
use wgedu::router::init_router;
use wgedu::state::AppState;
use wgedu_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use wgedu_db::{init_db_pool, run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let jwt_config = JwtConfig::from_env();
    if jwt_config.is_default_secret() {
        warn!("JWT_SECRET is not set, using the development secret");
    }
    let database_config = DatabaseConfig::from_env();
    let server_config = ServerConfig::from_env();
    let cors_config = CorsConfig::from_env();

    let db = init_db_pool(&database_config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&db)
        .await
        .context("Failed to apply database schema")?;

    if database_config.seed_demo_data {
        ensure_seed_data(&db)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed demo data: {}", e))?;
    }

    let app = init_router(AppState::new(db, jwt_config, cors_config));

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("🚀 Server running on http://{}", address);
    info!("📚 Swagger UI available at http://{}/swagger-ui", address);
    info!("📖 Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
