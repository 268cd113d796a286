//! Multi-step write paths that combine several repositories.
//!
//! The request decision runs inside one transaction; every activity appended
//! here happens after the primary write and is best-effort.

pub mod events;
pub mod frequency_requests;
pub mod status_requests;

use clinic_core::error::CoreError;
use clinic_core::roles::validate_professional;
use clinic_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::User;
use crate::repositories::UserRepo;

/// Error type for workflow operations: a domain rule or a storage failure.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Load the professional a patient or request is filed under, if any.
///
/// A referenced user that does not exist is `NotFound`; one that is not an
/// active professional is a `Validation` error.
pub async fn resolve_professional(
    pool: &PgPool,
    professional_id: Option<DbId>,
) -> WorkflowResult<Option<User>> {
    let Some(id) = professional_id else {
        return Ok(None);
    };
    let user = UserRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "professional",
            id,
        })?;
    validate_professional(user.id, &user.role, user.is_active)?;
    Ok(Some(user))
}
