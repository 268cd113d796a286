//! Handlers for users and the professional directory.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clinic_core::dto::{to_dto, to_dtos, UserDto};
use clinic_core::error::CoreError;
use clinic_core::roles::validate_role;
use clinic_core::types::DbId;
use clinic_db::models::user::{CreateUser, RegisterUser};
use clinic_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_new_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: to_dtos::<UserDto, _>(&users, &state.dto),
    }))
}

/// POST /api/v1/users
///
/// Create an account. The password is hashed before it reaches the database.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "User name is required".into(),
        )));
    }
    validate_role(&input.role)?;
    validate_new_password(&input.password)?;
    if !input.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email is required".into(),
        )));
    }

    let password_hash = hash_password(&input.password)?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name.trim().to_string(),
            email: input.email.trim().to_lowercase(),
            password_hash,
            role: input.role,
            phone: input.phone,
        },
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        role = %user.role,
        created_by = admin.user_id,
        "User created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: to_dto::<UserDto, _>(&user, &state.dto),
        }),
    ))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: user_id,
        }))?;

    Ok(Json(DataResponse {
        data: to_dto::<UserDto, _>(&user, &state.dto),
    }))
}

/// GET /api/v1/professionals
pub async fn list_professionals(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_professionals(&state.pool).await?;
    Ok(Json(DataResponse {
        data: to_dtos::<UserDto, _>(&users, &state.dto),
    }))
}
