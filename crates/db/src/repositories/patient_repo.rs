//! Repository for the `patients` table.
//!
//! Every read joins the assigned professional's name. The status and
//! frequency setters are only called from the request decision transaction.

use clinic_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::patient::{CreatePatient, Patient, UpdatePatient};

/// Column list over `patients p LEFT JOIN users u`.
const COLUMNS: &str = "p.id, p.name, p.email, p.phone, p.birth_date, p.status, \
                        p.session_frequency, p.professional_id, u.name AS professional_name, \
                        p.assigned_at, p.created_at, p.updated_at";

/// Join clause shared by every read.
const JOIN: &str = "LEFT JOIN users u ON u.id = p.professional_id";

/// Provides CRUD operations for patients.
pub struct PatientRepo;

impl PatientRepo {
    /// Insert a new patient in the default status, returning the created row.
    ///
    /// `assigned_at` is stamped when a professional is given.
    pub async fn create(pool: &PgPool, input: &CreatePatient) -> Result<Patient, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                INSERT INTO patients
                    (name, email, phone, birth_date, session_frequency, professional_id, assigned_at)
                VALUES ($1, $2, $3, $4, $5, $6::BIGINT,
                        CASE WHEN $6::BIGINT IS NULL THEN NULL ELSE NOW() END)
                RETURNING *
             )
             SELECT {COLUMNS} FROM p {JOIN}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.birth_date)
            .bind(&input.session_frequency)
            .bind(input.professional_id)
            .fetch_one(pool)
            .await
    }

    /// Find a patient by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients p {JOIN} WHERE p.id = $1");
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List patients ordered by name, optionally filtered by professional
    /// and/or status.
    pub async fn list(
        pool: &PgPool,
        professional_id: Option<DbId>,
        status: Option<&str>,
    ) -> Result<Vec<Patient>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM patients p {JOIN}
             WHERE ($1::BIGINT IS NULL OR p.professional_id = $1)
               AND ($2::TEXT IS NULL OR p.status = $2)
             ORDER BY p.name ASC, p.id ASC"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(professional_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Direct administrative edit. Only non-`None` fields are applied.
    ///
    /// `session_frequency` and `professional_id` are cleared by `Some(None)`.
    /// Reassigning to a different professional refreshes `assigned_at`;
    /// unassigning clears it. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePatient,
    ) -> Result<Option<Patient>, sqlx::Error> {
        let frequency_provided = input.session_frequency.is_some();
        let frequency = input.session_frequency.as_ref().and_then(|v| v.as_deref());
        let professional_provided = input.professional_id.is_some();
        let professional_id = input.professional_id.flatten();

        let query = format!(
            "WITH p AS (
                UPDATE patients SET
                    name = COALESCE($2, name),
                    email = COALESCE($3, email),
                    phone = COALESCE($4, phone),
                    birth_date = COALESCE($5, birth_date),
                    status = COALESCE($6, status),
                    session_frequency = CASE WHEN $7 THEN $8::TEXT ELSE session_frequency END,
                    professional_id = CASE WHEN $9 THEN $10::BIGINT ELSE professional_id END,
                    assigned_at = CASE
                        WHEN NOT $9 THEN assigned_at
                        WHEN $10::BIGINT IS NULL THEN NULL
                        WHEN $10::BIGINT IS DISTINCT FROM professional_id THEN NOW()
                        ELSE assigned_at
                    END
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM p {JOIN}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.birth_date)
            .bind(&input.status)
            .bind(frequency_provided)
            .bind(frequency)
            .bind(professional_provided)
            .bind(professional_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a patient by ID. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign key violation while requests reference the patient.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the patient's status within an existing transaction.
    ///
    /// Returns `false` if the patient does not exist.
    pub async fn set_status(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE patients SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the patient's session frequency within an existing transaction.
    ///
    /// Returns `false` if the patient does not exist.
    pub async fn set_session_frequency(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        frequency: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE patients SET session_frequency = $2 WHERE id = $1")
            .bind(id)
            .bind(frequency)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
