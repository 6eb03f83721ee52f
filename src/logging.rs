use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_DIR: &str = "storage/logs";

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        error!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Server error");
    } else if response.status().is_client_error() {
        warn!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Client error");
    } else {
        info!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Request completed");
    }

    response
}

/// Installs the global subscriber: a compact console layer plus a daily
/// rolling JSON file in `LOG_DIR`. If the log directory cannot be created
/// the file layer is skipped and only the console is used.
pub fn init_tracing() {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,tower_http=warn,sqlx=warn",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let file_error = std::fs::create_dir_all(&log_dir).err().map(|e| e.to_string());

    let json_layer = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("wgedu")
        .filename_suffix("json")
        .build(&log_dir)
        .map_err(|e| e.to_string())
        .map(|appender| {
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(EnvFilter::new("info"))
        });

    match json_layer {
        Ok(json_layer) => {
            tracing_subscriber::registry()
                .with(console_layer)
                .with(json_layer)
                .init();
            info!(log_dir = %log_dir, "Tracing initialized with file logging");
        }
        Err(e) => {
            tracing_subscriber::registry().with(console_layer).init();
            warn!(
                log_dir = %log_dir,
                error = %file_error.unwrap_or(e),
                "Log directory unavailable, logging to console only"
            );
        }
    }
}
