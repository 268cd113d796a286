//! Appointment entity model and DTOs.

use clinic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `appointments` table joined with patient and professional names.
///
/// `session_cost` is read as text (`NUMERIC::TEXT`) and coerced to a number
/// by the DTO layer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub patient_id: DbId,
    pub patient_name: Option<String>,
    pub professional_id: Option<DbId>,
    pub professional_name: Option<String>,
    pub scheduled_at: Timestamp,
    pub duration_minutes: Option<i32>,
    pub session_cost: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub audio_note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for scheduling an appointment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointment {
    pub patient_id: DbId,
    pub professional_id: Option<DbId>,
    pub scheduled_at: Timestamp,
    pub duration_minutes: Option<i32>,
    pub session_cost: Option<f64>,
    pub notes: Option<String>,
    pub audio_note: Option<String>,
}

/// DTO for updating an appointment. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointment {
    pub professional_id: Option<DbId>,
    pub scheduled_at: Option<Timestamp>,
    pub duration_minutes: Option<i32>,
    pub session_cost: Option<f64>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub audio_note: Option<String>,
}
