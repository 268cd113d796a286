//! Appointment status constants and validation.

use crate::error::CoreError;

pub const APPOINTMENT_SCHEDULED: &str = "scheduled";
pub const APPOINTMENT_COMPLETED: &str = "completed";
pub const APPOINTMENT_CANCELLED: &str = "cancelled";
pub const APPOINTMENT_NO_SHOW: &str = "no_show";

/// All valid appointment statuses.
pub const VALID_STATUSES: &[&str] = &[
    APPOINTMENT_SCHEDULED,
    APPOINTMENT_COMPLETED,
    APPOINTMENT_CANCELLED,
    APPOINTMENT_NO_SHOW,
];

/// Upper bound for a single session, in minutes.
pub const MAX_DURATION_MINUTES: i32 = 24 * 60;

/// Largest cost a `NUMERIC(10, 2)` column holds.
pub const MAX_SESSION_COST: f64 = 99_999_999.99;

/// Validate that a status string is one of the known appointment statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid appointment status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate an optional duration in minutes.
pub fn validate_duration(minutes: Option<i32>) -> Result<(), CoreError> {
    match minutes {
        Some(m) if m <= 0 || m > MAX_DURATION_MINUTES => Err(CoreError::Validation(format!(
            "Duration must be between 1 and {MAX_DURATION_MINUTES} minutes"
        ))),
        _ => Ok(()),
    }
}

/// Validate an optional session cost: finite, non-negative and storable.
pub fn validate_session_cost(cost: Option<f64>) -> Result<(), CoreError> {
    match cost {
        Some(c) if !c.is_finite() || c < 0.0 => Err(CoreError::Validation(
            "Session cost must be a non-negative number".into(),
        )),
        Some(c) if c > MAX_SESSION_COST => Err(CoreError::Validation(format!(
            "Session cost must not exceed {MAX_SESSION_COST:.2}"
        ))),
        _ => Ok(()),
    }
}

/// Whether moving from `previous` to `next` completes the appointment.
pub fn is_completion(previous: &str, next: &str) -> bool {
    previous != APPOINTMENT_COMPLETED && next == APPOINTMENT_COMPLETED
}
