//! Shared query parameter types for API handlers.
//!
//! Query strings use snake_case keys (`?professional_id=3&status=pending`).

use clinic_core::types::DbId;
use serde::Deserialize;

/// Query parameters for `GET /activities`.
///
/// `limit` and `offset` are clamped in the handler via `clamp_limit` /
/// `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityListParams {
    pub professional_id: Option<DbId>,
    pub patient_id: Option<DbId>,
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `?professional_id=&status=` filter used by patient and request listings.
#[derive(Debug, Default, Deserialize)]
pub struct ProfessionalStatusParams {
    pub professional_id: Option<DbId>,
    pub status: Option<String>,
}

/// `?professional_id=` scope for unread counts and mark-all-read.
#[derive(Debug, Default, Deserialize)]
pub struct ProfessionalScopeParams {
    pub professional_id: Option<DbId>,
}

/// Query parameters for `GET /appointments`.
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentListParams {
    pub patient_id: Option<DbId>,
    pub professional_id: Option<DbId>,
}

/// `?status=` filter for post listings.
#[derive(Debug, Default, Deserialize)]
pub struct StatusParams {
    pub status: Option<String>,
}
