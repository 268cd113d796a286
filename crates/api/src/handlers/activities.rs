//! Handlers for the activity feed.
//!
//! Professionals only see and acknowledge activities filed under them.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clinic_core::activity::{validate_activity_type, validate_metadata, validate_title};
use clinic_core::dto::{to_dto, to_dtos, ActivityDto};
use clinic_core::error::CoreError;
use clinic_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use clinic_core::types::DbId;
use clinic_db::models::activity::{ActivityFilter, CreateActivity};
use clinic_db::repositories::ActivityRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{ActivityListParams, ProfessionalScopeParams};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct MarkedRead {
    pub updated: u64,
}

/// GET /api/v1/activities
///
/// Newest first. `limit` defaults to 20 and is capped at 100.
pub async fn list_activities(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ActivityListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = ActivityFilter {
        professional_id: auth.professional_scope(params.professional_id),
        patient_id: params.patient_id,
        unread_only: params.unread_only,
    };
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);

    let activities = ActivityRepo::list(&state.pool, &filter, limit, offset).await?;

    Ok(Json(DataResponse {
        data: to_dtos::<ActivityDto, _>(&activities, &state.dto),
    }))
}

/// POST /api/v1/activities
///
/// Manually append an activity (admin only).
pub async fn create_activity(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateActivity>,
) -> AppResult<impl IntoResponse> {
    validate_activity_type(&input.activity_type)?;
    validate_title(&input.title)?;
    validate_metadata(input.metadata.as_ref())?;

    let activity = ActivityRepo::create(&state.pool, &input).await?;

    tracing::info!(
        activity_id = activity.id,
        activity_type = %activity.activity_type,
        user_id = admin.user_id,
        "Activity appended",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: to_dto::<ActivityDto, _>(&activity, &state.dto),
        }),
    ))
}

/// GET /api/v1/activities/unread-count
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ProfessionalScopeParams>,
) -> AppResult<impl IntoResponse> {
    let professional_id = auth.professional_scope(params.professional_id);
    let count = ActivityRepo::unread_count(&state.pool, professional_id).await?;

    Ok(Json(DataResponse {
        data: UnreadCount { count },
    }))
}

/// POST /api/v1/activities/read-all
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ProfessionalScopeParams>,
) -> AppResult<impl IntoResponse> {
    let professional_id = auth.professional_scope(params.professional_id);
    let updated = ActivityRepo::mark_all_read(&state.pool, professional_id).await?;

    tracing::info!(updated, user_id = auth.user_id, "Activities marked read");

    Ok(Json(DataResponse {
        data: MarkedRead { updated },
    }))
}

/// POST /api/v1/activities/{id}/read
///
/// Idempotent: marking an already read activity succeeds.
pub async fn mark_read(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(activity_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = ActivityRepo::mark_read(&state.pool, activity_id).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "activity",
            id: activity_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
