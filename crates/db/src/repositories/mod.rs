//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! `&PgPool` as the first argument. Methods that must run inside the request
//! decision transaction take `&mut Transaction<'_, Postgres>` instead.

pub mod activity_repo;
pub mod appointment_repo;
pub mod frequency_request_repo;
pub mod patient_repo;
pub mod post_repo;
pub mod status_request_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use appointment_repo::AppointmentRepo;
pub use frequency_request_repo::FrequencyRequestRepo;
pub use patient_repo::PatientRepo;
pub use post_repo::PostRepo;
pub use status_request_repo::StatusRequestRepo;
pub use user_repo::UserRepo;
