//! Route definitions for the `/activities` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// GET    /                -> list_activities
/// POST   /                -> create_activity (admin)
/// GET    /unread-count    -> unread_count
/// POST   /read-all        -> mark_all_read
/// POST   /{id}/read       -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(activities::list_activities).post(activities::create_activity),
        )
        .route("/unread-count", get(activities::unread_count))
        .route("/read-all", post(activities::mark_all_read))
        .route("/{id}/read", post(activities::mark_read))
}
