//! Row structs and input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row (serialized
//!   only into `clinic_core::dto` mappers, never directly to clients)
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod activity;
pub mod appointment;
pub mod frequency_request;
pub mod patient;
pub mod post;
pub mod status_request;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserialize a present field, including an explicit `null`, as `Some`.
///
/// Paired with `#[serde(default)]` an absent field stays `None`, so an update
/// DTO can tell "leave unchanged" (`None`) from "clear" (`Some(None)`).
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
