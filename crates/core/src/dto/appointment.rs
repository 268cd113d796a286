use serde::Serialize;

use super::{DtoConfig, FromRecord, PlainRecord};
use crate::appointment::APPOINTMENT_SCHEDULED;

/// Appointment as presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: String,
    pub patient_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    /// Empty when the professional was removed.
    pub professional_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    /// Money: always present, `0` when unknown.
    pub session_cost: f64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Opaque stored path of the session audio note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl FromRecord for AppointmentDto {
    fn from_record(rec: &PlainRecord, _config: &DtoConfig) -> Self {
        Self {
            id: rec.id("id"),
            patient_id: rec.id("patient_id"),
            patient_name: rec.non_empty_string("patient_name"),
            professional_id: rec.id("professional_id"),
            professional_name: rec.non_empty_string("professional_name"),
            scheduled_at: rec.iso_date("scheduled_at"),
            duration_minutes: rec.optional_integer("duration_minutes"),
            session_cost: rec.money("session_cost"),
            status: rec.string_or("status", APPOINTMENT_SCHEDULED),
            notes: rec.non_empty_string("notes"),
            audio_note: rec.optional_string("audio_note"),
            created_at: rec.iso_date("created_at"),
            updated_at: rec.iso_date("updated_at"),
        }
    }
}
