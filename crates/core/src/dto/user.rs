use serde::Serialize;

use super::{DtoConfig, FromRecord, PlainRecord};

/// User account as presented to clients. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl FromRecord for UserDto {
    fn from_record(rec: &PlainRecord, _config: &DtoConfig) -> Self {
        Self {
            id: rec.id("id"),
            name: rec.string("name"),
            email: rec.string("email"),
            role: rec.string("role"),
            phone: rec.non_empty_string("phone"),
            is_active: rec.bool_or("is_active", true),
            created_at: rec.iso_date("created_at"),
        }
    }
}
