use serde::Serialize;

use super::{DtoConfig, FromRecord, PlainRecord};
use crate::requests::{resolve_request_type, REQUEST_PENDING};

/// Status change request as presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequestDto {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub professional_id: String,
    pub professional_name: String,
    pub current_status: String,
    pub requested_status: String,
    pub reason: String,
    pub status: String,
    /// Only present once a non-empty response was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl FromRecord for StatusRequestDto {
    fn from_record(rec: &PlainRecord, _config: &DtoConfig) -> Self {
        let current_status = rec.string("current_status");
        let requested_status = rec.string("requested_status");
        let stored_type = rec.optional_string("type");
        let request_type =
            resolve_request_type(stored_type.as_deref(), &current_status, &requested_status);

        Self {
            id: rec.id("id"),
            patient_id: rec.id("patient_id"),
            patient_name: rec.string("patient_name"),
            professional_id: rec.id("professional_id"),
            professional_name: rec.string("professional_name"),
            current_status,
            requested_status,
            reason: rec.string("reason"),
            status: rec.string_or("status", REQUEST_PENDING),
            admin_response: rec.non_empty_string("admin_response"),
            request_type: request_type.to_string(),
            decided_by: rec.optional_id("decided_by"),
            decided_at: rec.iso_date("decided_at"),
            created_at: rec.iso_date("created_at"),
            updated_at: rec.iso_date("updated_at"),
        }
    }
}

/// Session frequency change request as presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyRequestDto {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub professional_id: String,
    pub professional_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_frequency: Option<String>,
    pub requested_frequency: String,
    pub reason: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl FromRecord for FrequencyRequestDto {
    fn from_record(rec: &PlainRecord, _config: &DtoConfig) -> Self {
        Self {
            id: rec.id("id"),
            patient_id: rec.id("patient_id"),
            patient_name: rec.string("patient_name"),
            professional_id: rec.id("professional_id"),
            professional_name: rec.string("professional_name"),
            current_frequency: rec.non_empty_string("current_frequency"),
            requested_frequency: rec.string("requested_frequency"),
            reason: rec.string("reason"),
            status: rec.string_or("status", REQUEST_PENDING),
            admin_response: rec.non_empty_string("admin_response"),
            decided_by: rec.optional_id("decided_by"),
            decided_at: rec.iso_date("decided_at"),
            created_at: rec.iso_date("created_at"),
            updated_at: rec.iso_date("updated_at"),
        }
    }
}
