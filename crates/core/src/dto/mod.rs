//! Client-facing DTOs and the mappers that build them.
//!
//! Mapping is pure and infallible: a row is normalized once with
//! [`to_plain_record`] and each DTO reads from that record, degrading
//! malformed values to defaults instead of failing the response.
//!
//! Conventions shared by every DTO:
//! - identity fields are strings;
//! - dates are ISO-8601 UTC and omitted when absent or invalid;
//! - optional fields are omitted rather than serialized as `null`;
//! - keys are camelCase.

pub mod activity;
pub mod appointment;
pub mod patient;
pub mod post;
pub mod record;
pub mod request;
pub mod user;

use serde::Serialize;

pub use activity::ActivityDto;
pub use appointment::AppointmentDto;
pub use patient::PatientDto;
pub use post::PostDto;
pub use record::{to_plain_record, PlainRecord};
pub use request::{FrequencyRequestDto, StatusRequestDto};
pub use user::UserDto;

/// Settings the mappers need from the deployment.
#[derive(Debug, Clone)]
pub struct DtoConfig {
    /// Base URL prepended to relative media paths (no trailing slash needed).
    pub public_base_url: String,
}

impl DtoConfig {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
        }
    }

    /// Absolute URL for a stored media path.
    ///
    /// Values that already carry an `http://` or `https://` scheme are
    /// returned unchanged.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// A DTO that can be built from a normalized record.
pub trait FromRecord: Sized {
    fn from_record(record: &PlainRecord, config: &DtoConfig) -> Self;
}

/// Map a single row into its DTO.
pub fn to_dto<D: FromRecord, T: Serialize>(row: &T, config: &DtoConfig) -> D {
    D::from_record(&to_plain_record(row), config)
}

/// Map a slice of rows into DTOs, preserving order.
pub fn to_dtos<D: FromRecord, T: Serialize>(rows: &[T], config: &DtoConfig) -> Vec<D> {
    rows.iter().map(|row| to_dto(row, config)).collect()
}
