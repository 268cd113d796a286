//! Handlers for the `/posts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clinic_core::dto::{to_dto, to_dtos, PostDto};
use clinic_core::error::CoreError;
use clinic_core::post::{
    is_publication, slugify, validate_slug, validate_status, validate_title,
};
use clinic_core::types::DbId;
use clinic_db::models::post::{CreatePost, UpdatePost, UpdatedPost};
use clinic_db::repositories::{ActivityRepo, PostRepo};
use clinic_db::workflow::events;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::StatusParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `POST /posts/{id}/views`.
#[derive(Debug, Serialize)]
pub struct ViewCount {
    pub views: i32,
}

/// GET /api/v1/posts
pub async fn list_posts(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &params.status {
        validate_status(status)?;
    }
    let posts = PostRepo::list(&state.pool, params.status.as_deref()).await?;
    Ok(Json(DataResponse {
        data: to_dtos::<PostDto, _>(&posts, &state.dto),
    }))
}

/// Slug for a title with nothing to derive one from.
fn generated_slug() -> String {
    format!("post-{}", Uuid::now_v7().simple())
}

/// POST /api/v1/posts
///
/// The caller becomes the author. Without an explicit slug one is derived
/// from the title, or generated when the title has no usable characters.
pub async fn create_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    let slug = match &input.slug {
        Some(slug) => slug.trim().to_string(),
        None => match slugify(&input.title) {
            derived if derived.is_empty() => generated_slug(),
            derived => derived,
        },
    };
    validate_slug(&slug)?;

    let post = PostRepo::create(&state.pool, Some(auth.user_id), &slug, &input).await?;

    tracing::info!(post_id = post.id, slug = %post.slug, user_id = auth.user_id, "Post created");

    if is_publication(None, &post.status) {
        ActivityRepo::record(&state.pool, &events::post_published(&post)).await;
    }

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: to_dto::<PostDto, _>(&post, &state.dto),
        }),
    ))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_id(&state.pool, post_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "post",
            id: post_id,
        }))?;

    Ok(Json(DataResponse {
        data: to_dto::<PostDto, _>(&post, &state.dto),
    }))
}

/// PUT /api/v1/posts/{id}
///
/// Moving a draft to `published` appends a `post_published` activity.
pub async fn update_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    let UpdatedPost {
        post,
        previous_status,
    } = PostRepo::update(&state.pool, post_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "post",
            id: post_id,
        }))?;

    tracing::info!(post_id, user_id = auth.user_id, "Post updated");

    if is_publication(Some(&previous_status), &post.status) {
        ActivityRepo::record(&state.pool, &events::post_published(&post)).await;
    }

    Ok(Json(DataResponse {
        data: to_dto::<PostDto, _>(&post, &state.dto),
    }))
}

/// POST /api/v1/posts/{id}/views
pub async fn record_view(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let views = PostRepo::increment_views(&state.pool, post_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "post",
            id: post_id,
        }))?;

    Ok(Json(DataResponse {
        data: ViewCount { views },
    }))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PostRepo::delete(&state.pool, post_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "post",
            id: post_id,
        }));
    }

    tracing::info!(post_id, user_id = auth.user_id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}
