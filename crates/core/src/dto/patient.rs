use serde::Serialize;

use super::{DtoConfig, FromRecord, PlainRecord};
use crate::patient::DEFAULT_STATUS;

/// Patient as presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_frequency: Option<String>,
    /// Empty when no professional is assigned.
    pub professional_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl FromRecord for PatientDto {
    fn from_record(rec: &PlainRecord, _config: &DtoConfig) -> Self {
        Self {
            id: rec.id("id"),
            name: rec.string("name"),
            email: rec.non_empty_string("email"),
            phone: rec.non_empty_string("phone"),
            birth_date: rec.iso_date("birth_date"),
            status: rec.string_or("status", DEFAULT_STATUS),
            session_frequency: rec.non_empty_string("session_frequency"),
            professional_id: rec.id("professional_id"),
            professional_name: rec.non_empty_string("professional_name"),
            assigned_at: rec.iso_date("assigned_at"),
            created_at: rec.iso_date("created_at"),
            updated_at: rec.iso_date("updated_at"),
        }
    }
}
