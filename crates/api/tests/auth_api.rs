//! HTTP-level tests for login, token checks and role enforcement.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, expect_json, get, get_auth, post_json, post_json_auth, seed_user, token_for,
    TEST_PASSWORD,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = seed_user(&pool, "Marta", "financial").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"email": "MARTA@clinic.test", "password": TEST_PASSWORD}),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;

    assert!(json["data"]["accessToken"].is_string());
    assert_eq!(json["data"]["expiresIn"], 15 * 60);
    assert_eq!(json["data"]["user"]["id"], user.id.to_string());
    assert_eq!(json["data"]["user"]["role"], "financial");
    assert!(json["data"]["user"].get("passwordHash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    seed_user(&pool, "Nina", "admin").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"email": "nina@clinic.test", "password": "incorrect_password"}),
    )
    .await;

    let json = expect_json(response, StatusCode::UNAUTHORIZED).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"email": "ghost@clinic.test", "password": "whatever"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/patients").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/patients", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_admin_is_admin_only(pool: PgPool) {
    let pro = seed_user(&pool, "Otavio", "professional").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/users", &token_for(&pro)).await;
    let json = expect_json(response, StatusCode::FORBIDDEN).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_creates_user_and_duplicate_email_conflicts(pool: PgPool) {
    let admin = seed_user(&pool, "Paula", "admin").await;
    let token = token_for(&admin);
    let body = json!({
        "name": "Dr Quintana",
        "email": "quintana@clinic.test",
        "password": "long-enough-password",
        "role": "professional",
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/users", body.clone(), &token).await;
    let json = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["role"], "professional");
    assert_eq!(json["data"]["isActive"], true);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/users", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/professionals", &token).await;
    let json = body_json(response).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Dr Quintana"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_rejects_weak_password_and_bad_role(pool: PgPool) {
    let admin = seed_user(&pool, "Rita", "admin").await;
    let token = token_for(&admin);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/users",
        json!({"name": "Sol", "email": "sol@clinic.test", "password": "short", "role": "admin"}),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/users",
        json!({
            "name": "Sol",
            "email": "sol@clinic.test",
            "password": "long-enough-password",
            "role": "receptionist",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
