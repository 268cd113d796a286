//! Repository for the `status_requests` table.
//!
//! Reads return rows exactly as stored; the request type is resolved at the
//! DTO boundary.

use clinic_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::status_request::{NewStatusRequest, StatusRequest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, patient_id, patient_name, professional_id, professional_name, \
                        current_status, requested_status, reason, status, admin_response, \
                        type, decided_by, decided_at, created_at, updated_at";

/// Provides persistence for patient status change requests.
pub struct StatusRequestRepo;

impl StatusRequestRepo {
    /// Insert a new `pending` request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewStatusRequest,
    ) -> Result<StatusRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO status_requests
                (patient_id, patient_name, professional_id, professional_name,
                 current_status, requested_status, reason, type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StatusRequest>(&query)
            .bind(input.patient_id)
            .bind(&input.patient_name)
            .bind(input.professional_id)
            .bind(&input.professional_name)
            .bind(&input.current_status)
            .bind(&input.requested_status)
            .bind(&input.reason)
            .bind(&input.request_type)
            .fetch_one(pool)
            .await
    }

    /// Find a request by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StatusRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM status_requests WHERE id = $1");
        sqlx::query_as::<_, StatusRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests newest first, optionally filtered by professional
    /// and/or request status.
    pub async fn list(
        pool: &PgPool,
        professional_id: Option<DbId>,
        status: Option<&str>,
    ) -> Result<Vec<StatusRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM status_requests
             WHERE ($1::BIGINT IS NULL OR professional_id = $1)
               AND ($2::TEXT IS NULL OR status = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, StatusRequest>(&query)
            .bind(professional_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// List all requests for one patient, newest first.
    pub async fn list_for_patient(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Vec<StatusRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM status_requests
             WHERE patient_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, StatusRequest>(&query)
            .bind(patient_id)
            .fetch_all(pool)
            .await
    }

    /// Load a request and lock its row until the transaction ends.
    pub async fn find_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<StatusRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM status_requests WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, StatusRequest>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Record a decision. An absent `admin_response` keeps the stored one.
    pub async fn mark_decided(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        status: &str,
        admin_response: Option<&str>,
        decided_by: Option<DbId>,
    ) -> Result<StatusRequest, sqlx::Error> {
        let query = format!(
            "UPDATE status_requests SET
                status = $2,
                admin_response = COALESCE($3, admin_response),
                decided_by = $4,
                decided_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StatusRequest>(&query)
            .bind(id)
            .bind(status)
            .bind(admin_response)
            .bind(decided_by)
            .fetch_one(&mut **tx)
            .await
    }
}
