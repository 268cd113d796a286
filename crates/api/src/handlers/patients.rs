//! Handlers for the `/patients` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clinic_core::dto::{to_dto, to_dtos, FrequencyRequestDto, PatientDto, StatusRequestDto};
use clinic_core::error::CoreError;
use clinic_core::patient::{validate_frequency, validate_name, validate_status};
use clinic_core::types::DbId;
use clinic_db::models::patient::{CreatePatient, Patient, UpdatePatient};
use clinic_db::repositories::{ActivityRepo, FrequencyRequestRepo, PatientRepo, StatusRequestRepo};
use clinic_db::workflow::{events, resolve_professional};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::ProfessionalStatusParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a patient or fail with 404.
pub(crate) async fn find_patient(pool: &PgPool, id: DbId) -> AppResult<Patient> {
    PatientRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "patient",
            id,
        }))
}

/// Fail unless `professional_id` is absent or names an active professional.
pub(crate) async fn ensure_professional(
    pool: &PgPool,
    professional_id: Option<DbId>,
) -> AppResult<()> {
    resolve_professional(pool, professional_id).await?;
    Ok(())
}

/// GET /api/v1/patients
pub async fn list_patients(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ProfessionalStatusParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &params.status {
        validate_status(status)?;
    }
    let professional_id = auth.professional_scope(params.professional_id);
    let patients =
        PatientRepo::list(&state.pool, professional_id, params.status.as_deref()).await?;

    Ok(Json(DataResponse {
        data: to_dtos::<PatientDto, _>(&patients, &state.dto),
    }))
}

/// POST /api/v1/patients
///
/// Register a patient in the default status. A professional registering a
/// patient without naming one becomes the assigned professional.
pub async fn create_patient(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreatePatient>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name)?;
    if let Some(frequency) = &input.session_frequency {
        validate_frequency(frequency)?;
    }
    if input.professional_id.is_none() && auth.is_professional() {
        input.professional_id = Some(auth.user_id);
    }
    ensure_professional(&state.pool, input.professional_id).await?;

    let patient = PatientRepo::create(&state.pool, &input).await?;

    tracing::info!(patient_id = patient.id, user_id = auth.user_id, "Patient created");
    ActivityRepo::record(&state.pool, &events::new_patient(&patient)).await;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: to_dto::<PatientDto, _>(&patient, &state.dto),
        }),
    ))
}

/// GET /api/v1/patients/{id}
pub async fn get_patient(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let patient = find_patient(&state.pool, patient_id).await?;
    Ok(Json(DataResponse {
        data: to_dto::<PatientDto, _>(&patient, &state.dto),
    }))
}

/// PUT /api/v1/patients/{id}
///
/// Direct administrative edit; bypasses the request workflow.
pub async fn update_patient(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
    Json(input): Json<UpdatePatient>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    if let Some(Some(frequency)) = &input.session_frequency {
        validate_frequency(frequency)?;
    }
    ensure_professional(&state.pool, input.professional_id.flatten()).await?;

    let patient = PatientRepo::update(&state.pool, patient_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "patient",
            id: patient_id,
        }))?;

    tracing::info!(patient_id, user_id = admin.user_id, "Patient updated");

    Ok(Json(DataResponse {
        data: to_dto::<PatientDto, _>(&patient, &state.dto),
    }))
}

/// DELETE /api/v1/patients/{id}
///
/// Refused with 409 while status or frequency requests reference the patient.
pub async fn delete_patient(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PatientRepo::delete(&state.pool, patient_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "patient",
            id: patient_id,
        }));
    }

    tracing::info!(patient_id, user_id = admin.user_id, "Patient deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/patients/{id}/status-requests
pub async fn list_status_requests(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_patient(&state.pool, patient_id).await?;
    let requests = StatusRequestRepo::list_for_patient(&state.pool, patient_id).await?;
    Ok(Json(DataResponse {
        data: to_dtos::<StatusRequestDto, _>(&requests, &state.dto),
    }))
}

/// GET /api/v1/patients/{id}/frequency-requests
pub async fn list_frequency_requests(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_patient(&state.pool, patient_id).await?;
    let requests = FrequencyRequestRepo::list_for_patient(&state.pool, patient_id).await?;
    Ok(Json(DataResponse {
        data: to_dtos::<FrequencyRequestDto, _>(&requests, &state.dto),
    }))
}
