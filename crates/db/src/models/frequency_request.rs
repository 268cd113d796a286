//! Session frequency change request model and DTOs.

use clinic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `frequency_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FrequencyRequest {
    pub id: DbId,
    pub patient_id: DbId,
    pub patient_name: String,
    pub professional_id: Option<DbId>,
    pub professional_name: String,
    pub current_frequency: Option<String>,
    pub requested_frequency: String,
    pub reason: String,
    pub status: String,
    pub admin_response: Option<String>,
    pub decided_by: Option<DbId>,
    pub decided_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /frequency-requests`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFrequencyRequest {
    pub patient_id: DbId,
    pub professional_id: Option<DbId>,
    pub reason: String,
    pub current_frequency: Option<String>,
    pub requested_frequency: String,
}

/// Fully resolved insert, with name snapshots captured.
#[derive(Debug, Clone)]
pub struct NewFrequencyRequest {
    pub patient_id: DbId,
    pub patient_name: String,
    pub professional_id: Option<DbId>,
    pub professional_name: String,
    pub current_frequency: Option<String>,
    pub requested_frequency: String,
    pub reason: String,
}
