pub mod activities;
pub mod appointments;
pub mod auth;
pub mod frequency_requests;
pub mod health;
pub mod patients;
pub mod posts;
pub mod status_requests;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
///
/// /users                                           list, create (admin only)
/// /users/{id}                                      get
/// /professionals                                   active professionals
///
/// /patients                                        list, create
/// /patients/{id}                                   get, update, delete (admin for writes)
/// /patients/{id}/status-requests                   requests filed for the patient
/// /patients/{id}/frequency-requests                requests filed for the patient
///
/// /appointments                                    list, create
/// /appointments/{id}                               get, update, delete
///
/// /posts                                           list, create
/// /posts/{id}                                      get, update, delete
/// /posts/{id}/views                                increment views (public)
///
/// /status-requests                                 list, create
/// /status-requests/{id}                            get
/// /status-requests/{id}/decision                   approve or reject (admin, financial)
///
/// /frequency-requests                              list, create
/// /frequency-requests/{id}                         get
/// /frequency-requests/{id}/decision                approve or reject (admin, financial)
///
/// /activities                                      feed, append (admin)
/// /activities/unread-count                         unread count
/// /activities/read-all                             mark all read
/// /activities/{id}/read                            mark one read
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .route("/professionals", get(handlers::users::list_professionals))
        .nest("/patients", patients::router())
        .nest("/appointments", appointments::router())
        .nest("/posts", posts::router())
        // Change requests and their decisions.
        .nest("/status-requests", status_requests::router())
        .nest("/frequency-requests", frequency_requests::router())
        .nest("/activities", activities::router())
}
