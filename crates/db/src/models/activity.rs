//! Activity feed model and DTOs.

use clinic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub activity_type: String,
    pub title: String,
    pub description: String,
    pub occurred_at: Timestamp,
    pub metadata: serde_json::Value,
    pub read: bool,
    pub patient_id: Option<DbId>,
    pub professional_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for appending an activity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub metadata: Option<serde_json::Value>,
    pub patient_id: Option<DbId>,
    pub professional_id: Option<DbId>,
}

/// Optional filters for listing activities.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityFilter {
    pub professional_id: Option<DbId>,
    pub patient_id: Option<DbId>,
    pub unread_only: bool,
}
