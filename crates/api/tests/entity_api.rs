//! HTTP-level tests for patients, appointments and posts, focused on the
//! normalized response shapes.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, expect_json, get_auth, id_of, post_json, post_json_auth,
    put_json_auth, seed_patient, seed_user, token_for,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Patients
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unassigned_patient_omits_assignment_fields(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let patient = seed_patient(&pool, "Ana", None).await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/patients/{}", patient.id),
        &token_for(&admin),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;

    assert_eq!(json["data"]["id"], patient.id.to_string());
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["professionalId"], "");
    assert!(json["data"].get("assignedAt").is_none());
    assert!(json["data"].get("professionalName").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_edit_assigns_professional(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let pro = seed_user(&pool, "Dr Lima", "professional").await;
    let patient = seed_patient(&pool, "Bia", None).await;
    let uri = format!("/api/v1/patients/{}", patient.id);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &uri,
        json!({"professionalId": pro.id, "status": "active"}),
        &token_for(&admin),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["professionalName"], "Dr Lima");
    assert_eq!(json["data"]["status"], "active");
    assert!(json["data"]["assignedAt"].is_string());

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, json!({"status": "alta"}), &token_for(&pro)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &uri,
        json!({"status": "graduated"}),
        &token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_only_professionals_can_be_assigned(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let financial = seed_user(&pool, "Money", "financial").await;
    let token = token_for(&admin);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/patients",
        json!({"name": "Jade", "professionalId": financial.id}),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let patient = seed_patient(&pool, "Jade", None).await;
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/patients/{}", patient.id),
        json!({"professionalId": admin.id}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/patients",
        json!({"name": "Kiko", "professionalId": 999999}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_edit_clears_frequency_and_professional(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let pro = seed_user(&pool, "Dr Lima", "professional").await;
    let patient = seed_patient(&pool, "Lara", Some(pro.id)).await;
    let uri = format!("/api/v1/patients/{}", patient.id);
    let token = token_for(&admin);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, json!({"phone": "555-0101"}), &token).await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["sessionFrequency"], "weekly");
    assert_eq!(json["data"]["professionalId"], pro.id.to_string());

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &uri,
        json!({"sessionFrequency": null, "professionalId": null}),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert!(json["data"].get("sessionFrequency").is_none());
    assert_eq!(json["data"]["professionalId"], "");
    assert!(json["data"].get("professionalName").is_none());
    assert!(json["data"].get("assignedAt").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patient_with_requests_cannot_be_deleted(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let token = token_for(&admin);
    let patient = seed_patient(&pool, "Caio", None).await;
    let uri = format!("/api/v1/patients/{}", patient.id);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/status-requests",
        json!({"patientId": patient.id, "requestedStatus": "active", "reason": "ready"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &uri, &token).await;
    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "INTEGRITY_ERROR");

    let other = seed_patient(&pool, "Duda", None).await;
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/patients/{}", other.id), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/patients/{}", other.id), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_appointment_cost_and_completion(pool: PgPool) {
    let pro = seed_user(&pool, "Dr Reis", "professional").await;
    let patient = seed_patient(&pool, "Enzo", Some(pro.id)).await;
    let token = token_for(&pro);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/appointments",
        json!({
            "patientId": patient.id,
            "scheduledAt": "2026-03-01T13:00:00Z",
            "sessionCost": 150.50,
        }),
        &token,
    )
    .await;
    let created = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(created["data"]["sessionCost"], 150.5);
    assert_eq!(created["data"]["status"], "scheduled");
    assert_eq!(created["data"]["patientName"], "Enzo");
    assert_eq!(created["data"]["scheduledAt"], "2026-03-01T13:00:00.000Z");
    assert!(created["data"].get("durationMinutes").is_none());
    let appointment_id = id_of(&created["data"]);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/appointments/{appointment_id}"),
        json!({"status": "completed", "durationMinutes": 50}),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["durationMinutes"], 50);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/activities", &token).await;
    let json = body_json(response).await;
    let types: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(types, vec!["appointment_completed"]);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/appointments?patient_id={}", patient.id),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/appointments",
        json!({
            "patientId": patient.id,
            "scheduledAt": "2026-03-08T13:00:00Z",
            "sessionCost": -1,
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_appointment_cost_beyond_column_precision_is_rejected(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let patient = seed_patient(&pool, "Fred", None).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/appointments",
        json!({
            "patientId": patient.id,
            "scheduledAt": "2026-03-01T13:00:00Z",
            "sessionCost": 1.0e9,
        }),
        &token_for(&admin),
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_defaults_views_and_publication(pool: PgPool) {
    let pro = seed_user(&pool, "Dr Melo", "professional").await;
    let token = token_for(&pro);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/posts",
        json!({"title": "Sleep & Anxiety", "content": "..."}),
        &token,
    )
    .await;
    let created = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(created["data"]["slug"], "sleep-anxiety");
    assert_eq!(created["data"]["status"], "draft");
    assert_eq!(created["data"]["views"], 0);
    assert_eq!(created["data"]["likes"], 0);
    assert_eq!(created["data"]["tags"], json!([]));
    assert_eq!(created["data"]["seo"], json!({}));
    assert_eq!(created["data"]["authorName"], "Dr Melo");
    assert!(created["data"].get("publishedAt").is_none());
    let post_id = id_of(&created["data"]);

    for expected in [1, 2] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, &format!("/api/v1/posts/{post_id}/views"), json!({})).await;
        let json = expect_json(response, StatusCode::OK).await;
        assert_eq!(json["data"]["views"], expected);
    }

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/posts/{post_id}"),
        json!({"status": "published"}),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert!(json["data"]["publishedAt"].is_string());
    assert_eq!(json["data"]["views"], 2);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/activities", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["type"], "post_published");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/posts",
        json!({"title": "Another", "slug": "sleep-anxiety"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/posts/999999/views", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_slug_fallback_and_single_publication(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let token = token_for(&admin);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/posts", json!({"title": "日本語"}), &token).await;
    let created = expect_json(response, StatusCode::CREATED).await;
    let slug = created["data"]["slug"].as_str().unwrap().to_string();
    assert!(slug.starts_with("post-"), "unexpected slug {slug}");
    let post_id = id_of(&created["data"]);

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = put_json_auth(
            app,
            &format!("/api/v1/posts/{post_id}"),
            json!({"status": "published"}),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/activities", &token).await;
    let json = expect_json(response, StatusCode::OK).await;
    let published = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|a| a["type"] == "post_published")
        .count();
    assert_eq!(published, 1);
}
