//! Activity feed type constants and validation.
//!
//! `activities.type` is a free-form short string; the constants below are the
//! types this backend emits itself. Clients may append others.

use crate::error::CoreError;
use crate::requests::Decision;

pub const ACTIVITY_NEW_PATIENT: &str = "new_patient";
pub const ACTIVITY_POST_PUBLISHED: &str = "post_published";
pub const ACTIVITY_APPOINTMENT_COMPLETED: &str = "appointment_completed";
pub const ACTIVITY_DISCHARGE_REQUESTED: &str = "discharge_requested";
pub const ACTIVITY_STATUS_REQUEST_APPROVED: &str = "status_request_approved";
pub const ACTIVITY_STATUS_REQUEST_REJECTED: &str = "status_request_rejected";
pub const ACTIVITY_FREQUENCY_REQUEST_APPROVED: &str = "frequency_request_approved";
pub const ACTIVITY_FREQUENCY_REQUEST_REJECTED: &str = "frequency_request_rejected";

/// Maximum length of an activity type (matches `VARCHAR(64)`).
pub const MAX_TYPE_LENGTH: usize = 64;

/// Maximum length of an activity title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Activity type emitted when a status request is decided.
pub fn status_decision_type(decision: Decision) -> &'static str {
    match decision {
        Decision::Approved => ACTIVITY_STATUS_REQUEST_APPROVED,
        Decision::Rejected => ACTIVITY_STATUS_REQUEST_REJECTED,
    }
}

/// Activity type emitted when a frequency request is decided.
pub fn frequency_decision_type(decision: Decision) -> &'static str {
    match decision {
        Decision::Approved => ACTIVITY_FREQUENCY_REQUEST_APPROVED,
        Decision::Rejected => ACTIVITY_FREQUENCY_REQUEST_REJECTED,
    }
}

/// Validate a client-supplied activity type: non-blank and short.
pub fn validate_activity_type(activity_type: &str) -> Result<(), CoreError> {
    if activity_type.trim().is_empty() {
        return Err(CoreError::Validation("Activity type is required".into()));
    }
    if activity_type.len() > MAX_TYPE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Activity type exceeds maximum length of {MAX_TYPE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an activity title: non-blank and bounded.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Activity title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Activity title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate activity metadata: must be a JSON object when present.
pub fn validate_metadata(metadata: Option<&serde_json::Value>) -> Result<(), CoreError> {
    match metadata {
        None | Some(serde_json::Value::Object(_)) => Ok(()),
        Some(_) => Err(CoreError::Validation(
            "Activity metadata must be a JSON object".into(),
        )),
    }
}
