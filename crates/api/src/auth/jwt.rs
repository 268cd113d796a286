//! Staff access tokens.
//!
//! A token is an HS256 JWT issued by `clinic-api` at login. It carries the
//! user's id and [`Role`], so the request extractors can authorize without a
//! database round trip. A role change therefore takes effect at the next
//! login.

use clinic_core::error::CoreError;
use clinic_core::roles::Role;
use clinic_core::types::DbId;
use clinic_db::models::user::User;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// `iss` claim written into and required from every token.
pub const ISSUER: &str = "clinic-api";

/// Payload of a staff access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: DbId,
    pub role: Role,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    /// Random per-token id, handy when correlating logs.
    pub jti: String,
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    pub fn lifetime_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

/// A freshly signed token and how long it stays valid.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Sign an access token for `user`.
///
/// Fails with an internal error if the stored role is unknown, which would
/// mean the row bypassed the `users.role` CHECK constraint.
pub fn issue_for(user: &User, config: &JwtConfig) -> AppResult<IssuedToken> {
    let role = Role::parse(&user.role)
        .map_err(|_| AppError::InternalError(format!("User {} has unknown role", user.id)))?;
    issue(user.id, role, config)
}

/// Sign an access token for a user id and role.
pub fn issue(user_id: DbId, role: Role, config: &JwtConfig) -> AppResult<IssuedToken> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        role,
        iss: ISSUER.to_string(),
        iat: now,
        exp: now + config.lifetime_secs(),
        jti: Uuid::new_v4().to_string(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Token signing failed: {e}")))?;

    Ok(IssuedToken {
        token,
        expires_in: config.lifetime_secs(),
    })
}

/// Verify a bearer token and return its claims.
///
/// Every failure is `Unauthorized`; an expired token gets its own message
/// so clients know to log in again rather than drop the token as corrupt.
pub fn verify(token: &str, config: &JwtConfig) -> Result<Claims, CoreError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss"]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => CoreError::Unauthorized("Token has expired".into()),
        _ => CoreError::Unauthorized("Invalid token".into()),
    })
}
