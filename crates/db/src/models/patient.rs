//! Patient entity model and DTOs.

use chrono::NaiveDate;
use clinic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `patients` table joined with the assigned professional's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Patient {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub status: String,
    pub session_frequency: Option<String>,
    pub professional_id: Option<DbId>,
    pub professional_name: Option<String>,
    pub assigned_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new patient. Status always starts at the default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub session_frequency: Option<String>,
    pub professional_id: Option<DbId>,
}

/// DTO for a direct administrative edit. Only non-`None` fields are applied.
///
/// `session_frequency` and `professional_id` accept an explicit `null` to
/// clear the value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub session_frequency: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub professional_id: Option<Option<DbId>>,
}
