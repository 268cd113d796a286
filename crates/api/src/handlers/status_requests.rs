//! Handlers for the `/status-requests` resource.
//!
//! Professionals file requests; admin and financial users decide them.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clinic_core::dto::{to_dto, to_dtos, StatusRequestDto};
use clinic_core::error::CoreError;
use clinic_core::requests::{validate_request_status, Decision};
use clinic_core::types::DbId;
use clinic_db::models::status_request::{CreateStatusRequest, DecideRequest};
use clinic_db::repositories::StatusRequestRepo;
use clinic_db::workflow::status_requests;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireDecider;
use crate::query::ProfessionalStatusParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/status-requests
pub async fn list_status_requests(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ProfessionalStatusParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &params.status {
        validate_request_status(status)?;
    }
    let professional_id = auth.professional_scope(params.professional_id);
    let requests =
        StatusRequestRepo::list(&state.pool, professional_id, params.status.as_deref()).await?;

    Ok(Json(DataResponse {
        data: to_dtos::<StatusRequestDto, _>(&requests, &state.dto),
    }))
}

/// POST /api/v1/status-requests
pub async fn create_status_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateStatusRequest>,
) -> AppResult<impl IntoResponse> {
    if input.professional_id.is_none() && auth.is_professional() {
        input.professional_id = Some(auth.user_id);
    }

    let request = status_requests::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: to_dto::<StatusRequestDto, _>(&request, &state.dto),
        }),
    ))
}

/// GET /api/v1/status-requests/{id}
pub async fn get_status_request(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = StatusRequestRepo::find_by_id(&state.pool, request_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "status_request",
            id: request_id,
        }))?;

    Ok(Json(DataResponse {
        data: to_dto::<StatusRequestDto, _>(&request, &state.dto),
    }))
}

/// POST /api/v1/status-requests/{id}/decision
///
/// Approve or reject a pending request. A request that was already decided
/// yields 409.
pub async fn decide_status_request(
    RequireDecider(user): RequireDecider,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
    Json(input): Json<DecideRequest>,
) -> AppResult<impl IntoResponse> {
    let decision = Decision::parse(&input.decision)?;

    let request = status_requests::decide(
        &state.pool,
        request_id,
        decision,
        input.admin_response.as_deref(),
        Some(user.user_id),
    )
    .await?;

    Ok(Json(DataResponse {
        data: to_dto::<StatusRequestDto, _>(&request, &state.dto),
    }))
}
