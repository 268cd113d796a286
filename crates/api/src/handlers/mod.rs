pub mod activities;
pub mod appointments;
pub mod auth;
pub mod frequency_requests;
pub mod patients;
pub mod posts;
pub mod status_requests;
pub mod users;
