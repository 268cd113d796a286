//! Status and frequency change request lifecycle.
//!
//! A request starts `pending` and is decided exactly once, by an admin or
//! financial user, into one of the terminal states `approved` or `rejected`.
//! This module holds the state machine, the decision type, input validation
//! and the request-type classifier shared by the DB and API layers.

use crate::error::CoreError;
use crate::patient::STATUS_PENDING;

// ---------------------------------------------------------------------------
// Request status
// ---------------------------------------------------------------------------

/// Initial status of every request.
pub const REQUEST_PENDING: &str = "pending";
/// Terminal: the change was applied to the patient.
pub const REQUEST_APPROVED: &str = "approved";
/// Terminal: the change was refused.
pub const REQUEST_REJECTED: &str = "rejected";

/// All valid request statuses.
pub const VALID_REQUEST_STATUSES: &[&str] = &[REQUEST_PENDING, REQUEST_APPROVED, REQUEST_REJECTED];

// ---------------------------------------------------------------------------
// Status request type
// ---------------------------------------------------------------------------

/// A pending patient is being activated.
pub const TYPE_ACTIVATION: &str = "activation";
/// Any other status change.
pub const TYPE_STATUS_CHANGE: &str = "status_change";

/// All valid status request types.
pub const VALID_REQUEST_TYPES: &[&str] = &[TYPE_ACTIVATION, TYPE_STATUS_CHANGE];

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of the free-text reason (characters).
pub const MAX_REASON_LENGTH: usize = 2_000;

/// Maximum length of an admin response (characters).
pub const MAX_ADMIN_RESPONSE_LENGTH: usize = 2_000;

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// The outcome an authorized actor applies to a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    /// Parse a decision from its wire form (`"approved"` / `"rejected"`).
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            REQUEST_APPROVED => Ok(Decision::Approved),
            REQUEST_REJECTED => Ok(Decision::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid decision '{other}'. Must be one of: {REQUEST_APPROVED}, {REQUEST_REJECTED}"
            ))),
        }
    }

    /// The request status this decision moves a request into.
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Approved => REQUEST_APPROVED,
            Decision::Rejected => REQUEST_REJECTED,
        }
    }

    pub fn is_approval(self) -> bool {
        self == Decision::Approved
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Returns the set of statuses that `from_status` may transition to.
///
/// - `pending`  -> `approved`, `rejected`
/// - `approved` -> (terminal)
/// - `rejected` -> (terminal)
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        REQUEST_PENDING => &[REQUEST_APPROVED, REQUEST_REJECTED],
        _ => &[],
    }
}

/// Whether a request in `status` can no longer be decided.
pub fn is_terminal(status: &str) -> bool {
    valid_transitions(status).is_empty()
}

/// Validate that a request currently in `current` may receive `decision`.
///
/// Deciding a request twice is an [`CoreError::InvalidState`], never a
/// silent no-op.
pub fn validate_decision(current: &str, decision: Decision) -> Result<(), CoreError> {
    if valid_transitions(current).contains(&decision.as_str()) {
        Ok(())
    } else {
        Err(CoreError::InvalidState(format!(
            "Request is already '{current}' and cannot be {}",
            decision.as_str()
        )))
    }
}

// ---------------------------------------------------------------------------
// Type classifier
// ---------------------------------------------------------------------------

/// Derive the request type from the two statuses.
///
/// `activation` when a pending patient is moved to any other status,
/// `status_change` otherwise.
pub fn infer_request_type(current_status: &str, requested_status: &str) -> &'static str {
    if current_status == STATUS_PENDING && requested_status != STATUS_PENDING {
        TYPE_ACTIVATION
    } else {
        TYPE_STATUS_CHANGE
    }
}

/// Resolve the type to present for a stored request.
///
/// A persisted value wins when it belongs to the closed set; an absent or
/// unknown value falls back to [`infer_request_type`].
pub fn resolve_request_type(
    stored: Option<&str>,
    current_status: &str,
    requested_status: &str,
) -> &'static str {
    match stored {
        Some(TYPE_ACTIVATION) => TYPE_ACTIVATION,
        Some(TYPE_STATUS_CHANGE) => TYPE_STATUS_CHANGE,
        _ => infer_request_type(current_status, requested_status),
    }
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

/// Validate that a request status string is one of the known statuses.
pub fn validate_request_status(status: &str) -> Result<(), CoreError> {
    if VALID_REQUEST_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid request status '{status}'. Must be one of: {}",
            VALID_REQUEST_STATUSES.join(", ")
        )))
    }
}

/// Validate an explicitly supplied request type.
pub fn validate_request_type(request_type: &str) -> Result<(), CoreError> {
    if VALID_REQUEST_TYPES.contains(&request_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid request type '{request_type}'. Must be one of: {}",
            VALID_REQUEST_TYPES.join(", ")
        )))
    }
}

/// Validate the free-text reason: required and bounded.
pub fn validate_reason(reason: &str) -> Result<(), CoreError> {
    if reason.trim().is_empty() {
        return Err(CoreError::Validation("A reason is required".into()));
    }
    if reason.chars().count() > MAX_REASON_LENGTH {
        return Err(CoreError::Validation(format!(
            "Reason exceeds maximum length of {MAX_REASON_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an optional admin response.
pub fn validate_admin_response(response: Option<&str>) -> Result<(), CoreError> {
    match response {
        Some(text) if text.chars().count() > MAX_ADMIN_RESPONSE_LENGTH => {
            Err(CoreError::Validation(format!(
                "Admin response exceeds maximum length of {MAX_ADMIN_RESPONSE_LENGTH} characters"
            )))
        }
        _ => Ok(()),
    }
}

/// Normalize an optional admin response: blank text is treated as absent.
pub fn normalize_admin_response(response: Option<&str>) -> Option<String> {
    response
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
