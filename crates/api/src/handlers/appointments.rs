//! Handlers for the `/appointments` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clinic_core::appointment::{
    is_completion, validate_duration, validate_session_cost, validate_status,
};
use clinic_core::dto::{to_dto, to_dtos, AppointmentDto};
use clinic_core::error::CoreError;
use clinic_core::types::DbId;
use clinic_db::models::appointment::{CreateAppointment, UpdateAppointment};
use clinic_db::repositories::{ActivityRepo, AppointmentRepo};
use clinic_db::workflow::events;

use super::patients::{ensure_professional, find_patient};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::AppointmentListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/appointments
pub async fn list_appointments(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<AppointmentListParams>,
) -> AppResult<impl IntoResponse> {
    let professional_id = auth.professional_scope(params.professional_id);
    let appointments =
        AppointmentRepo::list(&state.pool, params.patient_id, professional_id).await?;

    Ok(Json(DataResponse {
        data: to_dtos::<AppointmentDto, _>(&appointments, &state.dto),
    }))
}

/// POST /api/v1/appointments
pub async fn create_appointment(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateAppointment>,
) -> AppResult<impl IntoResponse> {
    validate_duration(input.duration_minutes)?;
    validate_session_cost(input.session_cost)?;
    let patient = find_patient(&state.pool, input.patient_id).await?;
    if input.professional_id.is_none() {
        input.professional_id = if auth.is_professional() {
            Some(auth.user_id)
        } else {
            patient.professional_id
        };
    }
    ensure_professional(&state.pool, input.professional_id).await?;

    let appointment = AppointmentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        appointment_id = appointment.id,
        patient_id = appointment.patient_id,
        user_id = auth.user_id,
        "Appointment created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: to_dto::<AppointmentDto, _>(&appointment, &state.dto),
        }),
    ))
}

/// GET /api/v1/appointments/{id}
pub async fn get_appointment(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(appointment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let appointment = AppointmentRepo::find_by_id(&state.pool, appointment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "appointment",
            id: appointment_id,
        }))?;

    Ok(Json(DataResponse {
        data: to_dto::<AppointmentDto, _>(&appointment, &state.dto),
    }))
}

/// PUT /api/v1/appointments/{id}
///
/// Moving an appointment into `completed` appends an
/// `appointment_completed` activity.
pub async fn update_appointment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(appointment_id): Path<DbId>,
    Json(input): Json<UpdateAppointment>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    validate_duration(input.duration_minutes)?;
    validate_session_cost(input.session_cost)?;
    ensure_professional(&state.pool, input.professional_id).await?;

    let previous = AppointmentRepo::find_by_id(&state.pool, appointment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "appointment",
            id: appointment_id,
        }))?;

    let appointment = AppointmentRepo::update(&state.pool, appointment_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "appointment",
            id: appointment_id,
        }))?;

    tracing::info!(appointment_id, user_id = auth.user_id, "Appointment updated");

    if is_completion(&previous.status, &appointment.status) {
        ActivityRepo::record(&state.pool, &events::appointment_completed(&appointment)).await;
    }

    Ok(Json(DataResponse {
        data: to_dto::<AppointmentDto, _>(&appointment, &state.dto),
    }))
}

/// DELETE /api/v1/appointments/{id}
pub async fn delete_appointment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(appointment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AppointmentRepo::delete(&state.pool, appointment_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "appointment",
            id: appointment_id,
        }));
    }

    tracing::info!(appointment_id, user_id = auth.user_id, "Appointment deleted");

    Ok(StatusCode::NO_CONTENT)
}
