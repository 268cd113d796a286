use serde::Serialize;
use serde_json::{Map, Value};

use super::{DtoConfig, FromRecord, PlainRecord};

/// Activity feed entry as presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,
    pub metadata: Map<String, Value>,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_id: Option<String>,
}

impl FromRecord for ActivityDto {
    fn from_record(rec: &PlainRecord, _config: &DtoConfig) -> Self {
        Self {
            id: rec.id("id"),
            activity_type: rec.string("type"),
            title: rec.string("title"),
            description: rec.string("description"),
            occurred_at: rec.iso_date("occurred_at"),
            metadata: rec.object("metadata"),
            read: rec.bool_or("read", false),
            patient_id: rec.optional_id("patient_id"),
            professional_id: rec.optional_id("professional_id"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::to_dto;
    use serde_json::json;

    #[test]
    fn activity_defaults() {
        let row = json!({
            "id": 10,
            "type": "new_patient",
            "title": "Novo paciente",
            "description": "Ana",
            "occurred_at": "2026-04-01T09:00:00Z",
            "metadata": null,
            "read": null,
            "patient_id": 7,
            "professional_id": null,
        });
        let out = serde_json::to_value(to_dto::<ActivityDto, _>(
            &row,
            &DtoConfig::new("http://localhost:3000"),
        ))
        .unwrap();
        assert_eq!(out["type"], "new_patient");
        assert_eq!(out["metadata"], json!({}));
        assert_eq!(out["read"], false);
        assert_eq!(out["patientId"], "7");
        assert!(out.get("professionalId").is_none());
        assert_eq!(out["occurredAt"], "2026-04-01T09:00:00.000Z");
    }
}
