//! Route definitions for the `/posts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /              -> list_posts
/// POST   /              -> create_post
/// GET    /{id}          -> get_post
/// PUT    /{id}          -> update_post
/// DELETE /{id}          -> delete_post
/// POST   /{id}/views    -> record_view (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/{id}/views", post(posts::record_view))
}
