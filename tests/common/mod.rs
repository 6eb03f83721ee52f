#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::{PgPool, Postgres, Transaction};
use tower::ServiceExt;
use uuid::Uuid;

use wgedu::router::init_router;
use wgedu::state::AppState;
use wgedu_auth::{Role, create_access_token};
use wgedu_config::{CorsConfig, JwtConfig};
use wgedu_core::hash_password;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub struct TestUser {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub role: Role,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        token_expiry: 86_400,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    let state = AppState::new(
        pool,
        test_jwt_config(),
        CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
    );
    init_router(state)
}

pub fn generate_unique_username() -> String {
    format!("user_{}", &Uuid::new_v4().simple().to_string()[..12])
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Inserts an identity record directly, bypassing the API.
pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    username: &str,
    password: &str,
    role: Role,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO users (username, password, role)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(username)
    .bind(hashed)
    .bind(role.as_str())
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestUser {
        id,
        username: username.to_string(),
        password: password.to_string(),
        role,
    }
}

pub async fn create_test_subject(
    tx: &mut Transaction<'_, Postgres>,
    grade: &str,
    name: &str,
) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO subjects (grade, name, description)
        VALUES ($1, $2, '')
        RETURNING id
        "#,
    )
    .bind(grade)
    .bind(name)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

/// A signed token for `user`, valid against [`test_jwt_config`].
pub fn token_for(user: &TestUser) -> String {
    token_for_role(user.id, user.role)
}

pub fn token_for_role(user_id: i32, role: Role) -> String {
    create_access_token(user_id, role, &test_jwt_config()).unwrap()
}

/// Sends one request through the router and decodes the JSON body
/// (`Value::Null` when the body is not JSON).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Logs in through `POST /api/login` and returns the token.
pub async fn get_auth_token(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}
