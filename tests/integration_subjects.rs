mod common;

use axum::http::{Method, StatusCode};
use sqlx::PgPool;

use common::{create_test_subject, create_test_user, send, setup_test_app, token_for};
use wgedu_auth::Role;

async fn seed_catalog(pool: &PgPool) -> (String, i32) {
    let mut tx = pool.begin().await.unwrap();
    let student = create_test_user(&mut tx, "reader", "reader_pw", Role::Student).await;
    let physics = create_test_subject(&mut tx, "IB1", "IB1 Physics").await;
    create_test_subject(&mut tx, "IB1", "IB1 Biology").await;
    create_test_subject(&mut tx, "IB1", "IB1 Chemistry").await;
    create_test_subject(&mut tx, "PIB", "PIB Physics").await;
    create_test_subject(&mut tx, "IB2", "IB2 Economics").await;
    tx.commit().await.unwrap();
    (token_for(&student), physics)
}

fn names(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_by_grade_filters_and_orders_by_name(pool: PgPool) {
    let (token, _) = seed_catalog(&pool).await;
    let app = setup_test_app(pool);

    let (status, body) = send(&app, Method::GET, "/api/subjects/IB1", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&body),
        vec!["IB1 Biology", "IB1 Chemistry", "IB1 Physics"]
    );
    assert!(
        body.as_array()
            .unwrap()
            .iter()
            .all(|s| s["grade"] == "IB1")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_all_orders_by_grade_then_name(pool: PgPool) {
    let (token, _) = seed_catalog(&pool).await;
    let app = setup_test_app(pool);

    let (status, body) = send(&app, Method::GET, "/api/subjects", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&body),
        vec![
            "IB1 Biology",
            "IB1 Chemistry",
            "IB1 Physics",
            "IB2 Economics",
            "PIB Physics"
        ]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_grouped_by_grade(pool: PgPool) {
    let (token, _) = seed_catalog(&pool).await;
    let app = setup_test_app(pool);

    let (status, body) = send(&app, Method::GET, "/api/subjects/grouped", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let grouped = body.as_object().unwrap();
    assert_eq!(grouped.len(), 3);
    assert_eq!(grouped["IB1"].as_array().unwrap().len(), 3);
    assert_eq!(grouped["PIB"][0]["name"], "PIB Physics");
    assert_eq!(grouped["IB2"][0]["name"], "IB2 Economics");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_subject_by_id(pool: PgPool) {
    let (token, physics) = seed_catalog(&pool).await;
    let app = setup_test_app(pool);

    let uri = format!("/api/subjects/id/{}", physics);
    let (status, body) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], physics);
    assert_eq!(body["name"], "IB1 Physics");
    assert_eq!(body["grade"], "IB1");

    let (status, body) = send(&app, Method::GET, "/api/subjects/id/999999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Subject not found");

    let (status, _) = send(&app, Method::GET, "/api/subjects/id/abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_grade_returns_empty_list(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let teacher = create_test_user(&mut tx, "t1", "t1_pw", Role::Teacher).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool);
    let (status, body) = send(&app, Method::GET, "/api/subjects/PIB", Some(&token_for(&teacher)), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}
