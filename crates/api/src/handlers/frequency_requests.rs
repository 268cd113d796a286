//! Handlers for the `/frequency-requests` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clinic_core::dto::{to_dto, to_dtos, FrequencyRequestDto};
use clinic_core::error::CoreError;
use clinic_core::requests::{validate_request_status, Decision};
use clinic_core::types::DbId;
use clinic_db::models::frequency_request::CreateFrequencyRequest;
use clinic_db::models::status_request::DecideRequest;
use clinic_db::repositories::FrequencyRequestRepo;
use clinic_db::workflow::frequency_requests;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireDecider;
use crate::query::ProfessionalStatusParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/frequency-requests
pub async fn list_frequency_requests(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ProfessionalStatusParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &params.status {
        validate_request_status(status)?;
    }
    let professional_id = auth.professional_scope(params.professional_id);
    let requests =
        FrequencyRequestRepo::list(&state.pool, professional_id, params.status.as_deref())
            .await?;

    Ok(Json(DataResponse {
        data: to_dtos::<FrequencyRequestDto, _>(&requests, &state.dto),
    }))
}

/// POST /api/v1/frequency-requests
pub async fn create_frequency_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateFrequencyRequest>,
) -> AppResult<impl IntoResponse> {
    if input.professional_id.is_none() && auth.is_professional() {
        input.professional_id = Some(auth.user_id);
    }

    let request = frequency_requests::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: to_dto::<FrequencyRequestDto, _>(&request, &state.dto),
        }),
    ))
}

/// GET /api/v1/frequency-requests/{id}
pub async fn get_frequency_request(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = FrequencyRequestRepo::find_by_id(&state.pool, request_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "frequency_request",
            id: request_id,
        }))?;

    Ok(Json(DataResponse {
        data: to_dto::<FrequencyRequestDto, _>(&request, &state.dto),
    }))
}

/// POST /api/v1/frequency-requests/{id}/decision
pub async fn decide_frequency_request(
    RequireDecider(user): RequireDecider,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
    Json(input): Json<DecideRequest>,
) -> AppResult<impl IntoResponse> {
    let decision = Decision::parse(&input.decision)?;

    let request = frequency_requests::decide(
        &state.pool,
        request_id,
        decision,
        input.admin_response.as_deref(),
        Some(user.user_id),
    )
    .await?;

    Ok(Json(DataResponse {
        data: to_dto::<FrequencyRequestDto, _>(&request, &state.dto),
    }))
}
