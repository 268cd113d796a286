//! Staff account passwords.
//!
//! Stored as Argon2id PHC strings in `users.password_hash`. Plaintext never
//! leaves this module's callers: `create_user` hashes, `login` verifies.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use clinic_core::error::CoreError;

use crate::error::{AppError, AppResult};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Argon2 input beyond this is pointless work for the server.
pub const MAX_PASSWORD_LENGTH: usize = 128;

fn hasher() -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
}

/// Check a password chosen for a new account.
pub fn validate_new_password(password: &str) -> Result<(), CoreError> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at most {MAX_PASSWORD_LENGTH} characters long"
        )));
    }
    if password.trim().is_empty() {
        return Err(CoreError::Validation(
            "Password must not be only whitespace".into(),
        ));
    }
    Ok(())
}

/// Hash a password for storage.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    hasher()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))
}

/// Whether `password` matches the stored hash.
///
/// A stored value that is not a PHC string is an internal error, not a
/// mismatch: the account is broken and should show up in the logs.
pub fn password_matches(password: &str, stored_hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::InternalError(format!("Stored password hash is malformed: {e}")))?;
    match hasher().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::InternalError(format!(
            "Password verification failed: {e}"
        ))),
    }
}
