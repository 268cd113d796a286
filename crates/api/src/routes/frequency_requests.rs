//! Route definitions for the `/frequency-requests` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::frequency_requests;
use crate::state::AppState;

/// Routes mounted at `/frequency-requests`.
///
/// ```text
/// GET    /                  -> list_frequency_requests
/// POST   /                  -> create_frequency_request
/// GET    /{id}              -> get_frequency_request
/// POST   /{id}/decision     -> decide_frequency_request (admin, financial)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(frequency_requests::list_frequency_requests)
                .post(frequency_requests::create_frequency_request),
        )
        .route("/{id}", get(frequency_requests::get_frequency_request))
        .route(
            "/{id}/decision",
            post(frequency_requests::decide_frequency_request),
        )
}
