//! Route definitions for the `/patients` resource.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::patients;
use crate::state::AppState;

/// Routes mounted at `/patients`.
///
/// ```text
/// GET    /                          -> list_patients
/// POST   /                          -> create_patient
/// GET    /{id}                      -> get_patient
/// PUT    /{id}                      -> update_patient (admin)
/// DELETE /{id}                      -> delete_patient (admin)
///
/// GET    /{id}/status-requests      -> list_status_requests
/// GET    /{id}/frequency-requests   -> list_frequency_requests
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(patients::list_patients).post(patients::create_patient),
        )
        .route(
            "/{id}",
            get(patients::get_patient)
                .put(patients::update_patient)
                .delete(patients::delete_patient),
        )
        .route(
            "/{id}/status-requests",
            get(patients::list_status_requests),
        )
        .route(
            "/{id}/frequency-requests",
            get(patients::list_frequency_requests),
        )
}
