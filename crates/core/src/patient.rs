//! Patient status and session frequency constants and validation.
//!
//! Both sets are closed: any value outside them is rejected as a
//! validation error, never auto-corrected.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_INACTIVE: &str = "inactive";
pub const STATUS_ABSENT: &str = "absent";
/// Patient has been discharged.
pub const STATUS_ALTA: &str = "alta";

/// All valid patient statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_ACTIVE,
    STATUS_PENDING,
    STATUS_INACTIVE,
    STATUS_ABSENT,
    STATUS_ALTA,
];

/// Status assigned to newly registered patients.
pub const DEFAULT_STATUS: &str = STATUS_PENDING;

// ---------------------------------------------------------------------------
// Session frequency
// ---------------------------------------------------------------------------

pub const FREQUENCY_WEEKLY: &str = "weekly";
pub const FREQUENCY_BIWEEKLY: &str = "biweekly";
pub const FREQUENCY_MONTHLY: &str = "monthly";

/// All valid session frequencies.
pub const VALID_FREQUENCIES: &[&str] = &[FREQUENCY_WEEKLY, FREQUENCY_BIWEEKLY, FREQUENCY_MONTHLY];

/// Maximum length of a patient name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Validate that a status string is one of the known patient statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid patient status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate that a frequency string is one of the known session frequencies.
pub fn validate_frequency(frequency: &str) -> Result<(), CoreError> {
    if VALID_FREQUENCIES.contains(&frequency) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid session frequency '{frequency}'. Must be one of: {}",
            VALID_FREQUENCIES.join(", ")
        )))
    }
}

/// Validate a patient name: non-blank and within [`MAX_NAME_LENGTH`].
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Patient name is required".into()));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Patient name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}
