//! HTTP-level tests for status and frequency change requests and their
//! decisions.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, expect_json, get_auth, id_of, post_json_auth, seed_patient, seed_user, token_for,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Status requests
// ---------------------------------------------------------------------------

/// Create, approve, then try to approve again.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_activation_lifecycle(pool: PgPool) {
    let pro = seed_user(&pool, "Dr Lima", "professional").await;
    let financial = seed_user(&pool, "Fernanda", "financial").await;
    let patient = seed_patient(&pool, "Ana Souza", Some(pro.id)).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/status-requests",
        json!({
            "patientId": patient.id,
            "requestedStatus": "active",
            "reason": "eval complete",
        }),
        &token_for(&pro),
    )
    .await;
    let created = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(created["data"]["status"], "pending");
    assert_eq!(created["data"]["type"], "activation");
    assert_eq!(created["data"]["currentStatus"], "pending");
    assert_eq!(created["data"]["patientName"], "Ana Souza");
    assert_eq!(created["data"]["professionalName"], "Dr Lima");
    let request_id = id_of(&created["data"]);

    let uri = format!("/api/v1/status-requests/{request_id}/decision");
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &uri,
        json!({"decision": "approved", "adminResponse": "ok"}),
        &token_for(&financial),
    )
    .await;
    let decided = expect_json(response, StatusCode::OK).await;
    assert_eq!(decided["data"]["status"], "approved");
    assert_eq!(decided["data"]["adminResponse"], "ok");
    assert_eq!(decided["data"]["decidedBy"], financial.id.to_string());
    assert!(decided["data"]["decidedAt"].is_string());

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/patients/{}", patient.id),
        &token_for(&financial),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "active");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &uri,
        json!({"decision": "approved"}),
        &token_for(&financial),
    )
    .await;
    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "INVALID_STATE");

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/patients/{}", patient.id),
        &token_for(&financial),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "active");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_professional_cannot_decide(pool: PgPool) {
    let pro = seed_user(&pool, "Dr Melo", "professional").await;
    let patient = seed_patient(&pool, "Bia", Some(pro.id)).await;
    let token = token_for(&pro);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/status-requests",
        json!({"patientId": patient.id, "requestedStatus": "inactive", "reason": "moved"}),
        &token,
    )
    .await;
    let created = expect_json(response, StatusCode::CREATED).await;
    let request_id = id_of(&created["data"]);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/status-requests/{request_id}/decision"),
        json!({"decision": "approved"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_input_is_rejected(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let patient = seed_patient(&pool, "Caio", None).await;
    let token = token_for(&admin);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/status-requests",
        json!({"patientId": patient.id, "requestedStatus": "archived", "reason": "x"}),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/status-requests",
        json!({"patientId": 999999, "requestedStatus": "active", "reason": "x"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/status-requests",
        json!({"patientId": patient.id, "requestedStatus": "active", "reason": "ok"}),
        &token,
    )
    .await;
    let created = expect_json(response, StatusCode::CREATED).await;
    let request_id = id_of(&created["data"]);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/status-requests/{request_id}/decision"),
        json!({"decision": "maybe"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/status-requests/999999/decision",
        json!({"decision": "rejected"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_type_is_kept(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let patient = seed_patient(&pool, "Duda", None).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/status-requests",
        json!({
            "patientId": patient.id,
            "requestedStatus": "active",
            "reason": "return",
            "type": "status_change",
        }),
        &token_for(&admin),
    )
    .await;
    let json = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["type"], "status_change");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rejection_with_blank_response(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let patient = seed_patient(&pool, "Enzo", None).await;
    let token = token_for(&admin);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/status-requests",
        json!({"patientId": patient.id, "requestedStatus": "absent", "reason": "travel"}),
        &token,
    )
    .await;
    let request_id = id_of(&body_json(response).await["data"]);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/status-requests/{request_id}/decision"),
        json!({"decision": "rejected", "adminResponse": "   "}),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "rejected");
    assert!(json["data"].get("adminResponse").is_none());

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/patients/{}", patient.id), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
}

/// Professionals only see requests filed under them, whatever they ask for.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_is_scoped_for_professionals(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let pro_a = seed_user(&pool, "Dr A", "professional").await;
    let pro_b = seed_user(&pool, "Dr B", "professional").await;
    let patient_a = seed_patient(&pool, "Fabi", Some(pro_a.id)).await;
    let patient_b = seed_patient(&pool, "Gui", Some(pro_b.id)).await;

    for (patient_id, token) in [
        (patient_a.id, token_for(&pro_a)),
        (patient_b.id, token_for(&pro_b)),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/status-requests",
            json!({"patientId": patient_id, "requestedStatus": "active", "reason": "ready"}),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/status-requests?professional_id={}", pro_b.id),
        &token_for(&pro_a),
    )
    .await;
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["patientName"], "Fabi");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        "/api/v1/status-requests?status=pending",
        &token_for(&admin),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/patients/{}/status-requests", patient_b.id),
        &token_for(&admin),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["professionalName"], "Dr B");

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/status-requests?status=done",
        &token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Frequency requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_frequency_request_approval(pool: PgPool) {
    let pro = seed_user(&pool, "Dr Reis", "professional").await;
    let admin = seed_user(&pool, "Admin", "admin").await;
    let patient = seed_patient(&pool, "Helena", Some(pro.id)).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/frequency-requests",
        json!({
            "patientId": patient.id,
            "requestedFrequency": "biweekly",
            "reason": "improving",
        }),
        &token_for(&pro),
    )
    .await;
    let created = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(created["data"]["currentFrequency"], "weekly");
    assert_eq!(created["data"]["requestedFrequency"], "biweekly");
    assert_eq!(created["data"]["professionalId"], pro.id.to_string());
    let request_id = id_of(&created["data"]);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/frequency-requests/{request_id}/decision"),
        json!({"decision": "approved"}),
        &token_for(&admin),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "approved");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/patients/{}", patient.id),
        &token_for(&admin),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["sessionFrequency"], "biweekly");

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/patients/{}/frequency-requests", patient.id),
        &token_for(&pro),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["status"], "approved");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_frequency_request_validation(pool: PgPool) {
    let admin = seed_user(&pool, "Admin", "admin").await;
    let patient = seed_patient(&pool, "Igor", None).await;
    let token = token_for(&admin);

    // No professional on the patient and none given.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/frequency-requests",
        json!({"patientId": patient.id, "requestedFrequency": "monthly", "reason": "r"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A financial user cannot stand in as the professional.
    let financial = seed_user(&pool, "Money", "financial").await;
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/frequency-requests",
        json!({
            "patientId": patient.id,
            "professionalId": financial.id,
            "requestedFrequency": "monthly",
            "reason": "r",
        }),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/frequency-requests",
        json!({"patientId": patient.id, "requestedFrequency": "daily", "reason": "r"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
