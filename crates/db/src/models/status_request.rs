//! Patient status change request model and DTOs.

use clinic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `status_requests` table.
///
/// `patient_name` and `professional_name` are snapshots taken at creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusRequest {
    pub id: DbId,
    pub patient_id: DbId,
    pub patient_name: String,
    pub professional_id: Option<DbId>,
    pub professional_name: Option<String>,
    pub current_status: String,
    pub requested_status: String,
    pub reason: String,
    pub status: String,
    pub admin_response: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub request_type: Option<String>,
    pub decided_by: Option<DbId>,
    pub decided_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /status-requests`.
///
/// `current_status` defaults to the patient's status at creation time and
/// `professional_id` to the patient's assigned professional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStatusRequest {
    pub patient_id: DbId,
    pub professional_id: Option<DbId>,
    pub reason: String,
    pub current_status: Option<String>,
    pub requested_status: String,
    #[serde(rename = "type")]
    pub request_type: Option<String>,
}

/// Fully resolved insert, with name snapshots captured.
#[derive(Debug, Clone)]
pub struct NewStatusRequest {
    pub patient_id: DbId,
    pub patient_name: String,
    pub professional_id: Option<DbId>,
    pub professional_name: Option<String>,
    pub current_status: String,
    pub requested_status: String,
    pub reason: String,
    pub request_type: Option<String>,
}

/// Request body for the decision endpoints of both request kinds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecideRequest {
    pub decision: String,
    pub admin_response: Option<String>,
}
