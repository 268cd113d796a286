//! Route definitions for the `/status-requests` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::status_requests;
use crate::state::AppState;

/// Routes mounted at `/status-requests`.
///
/// ```text
/// GET    /                  -> list_status_requests
/// POST   /                  -> create_status_request
/// GET    /{id}              -> get_status_request
/// POST   /{id}/decision     -> decide_status_request (admin, financial)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(status_requests::list_status_requests)
                .post(status_requests::create_status_request),
        )
        .route("/{id}", get(status_requests::get_status_request))
        .route(
            "/{id}/decision",
            post(status_requests::decide_status_request),
        )
}
