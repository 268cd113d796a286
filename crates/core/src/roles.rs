//! Clinic staff roles.
//!
//! The wire and column form is the lowercase name, which must match the
//! CHECK constraint on `users.role` in `20260301000001_create_users_table.sql`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_FINANCIAL: &str = "financial";
pub const ROLE_PROFESSIONAL: &str = "professional";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_FINANCIAL, ROLE_PROFESSIONAL];

/// A staff member's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including direct patient edits and account management.
    Admin,
    /// Decides requests alongside admins.
    Financial,
    /// Treats patients; sees only their own caseload.
    Professional,
}

impl Role {
    /// Parse a stored or submitted role name.
    pub fn parse(role: &str) -> Result<Self, CoreError> {
        match role {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_FINANCIAL => Ok(Role::Financial),
            ROLE_PROFESSIONAL => Ok(Role::Professional),
            other => Err(CoreError::Validation(format!(
                "Invalid role '{other}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Financial => ROLE_FINANCIAL,
            Role::Professional => ROLE_PROFESSIONAL,
        }
    }

    /// Whether this role may approve or reject status/frequency requests.
    pub fn can_decide_requests(self) -> bool {
        matches!(self, Role::Admin | Role::Financial)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate that a role string is one of the known roles.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    Role::parse(role).map(|_| ())
}

/// Validate that a user may be assigned patients or named on a request.
pub fn validate_professional(user_id: DbId, role: &str, is_active: bool) -> Result<(), CoreError> {
    if role != ROLE_PROFESSIONAL {
        return Err(CoreError::Validation(format!(
            "User {user_id} is not a professional (role '{role}')"
        )));
    }
    if !is_active {
        return Err(CoreError::Validation(format!(
            "Professional {user_id} is inactive"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_round_trip_through_names() {
        for name in VALID_ROLES {
            let role = Role::parse(name).unwrap();
            assert_eq!(role.as_str(), *name);
            assert_eq!(role.to_string(), *name);
        }
        assert!(validate_role("reviewer").is_err());
        assert!(validate_role("Admin").is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_value(Role::Financial).unwrap(),
            serde_json::json!("financial")
        );
        let role: Role = serde_json::from_value(serde_json::json!("professional")).unwrap();
        assert_eq!(role, Role::Professional);
        assert!(serde_json::from_value::<Role>(serde_json::json!("superuser")).is_err());
    }

    #[test]
    fn only_admin_and_financial_decide() {
        assert!(Role::Admin.can_decide_requests());
        assert!(Role::Financial.can_decide_requests());
        assert!(!Role::Professional.can_decide_requests());
    }

    #[test]
    fn only_active_professionals_are_assignable() {
        assert!(validate_professional(7, ROLE_PROFESSIONAL, true).is_ok());
        assert!(matches!(
            validate_professional(7, ROLE_FINANCIAL, true),
            Err(CoreError::Validation(_))
        ));
        assert!(validate_professional(7, ROLE_ADMIN, true).is_err());
        assert!(validate_professional(7, ROLE_PROFESSIONAL, false).is_err());
    }
}
