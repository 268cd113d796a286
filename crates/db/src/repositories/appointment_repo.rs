//! Repository for the `appointments` table.

use clinic_core::types::DbId;
use sqlx::PgPool;

use crate::models::appointment::{Appointment, CreateAppointment, UpdateAppointment};

/// Column list over `appointments a JOIN patients pt LEFT JOIN users u`.
///
/// `session_cost` is cast to text so the exact stored decimal reaches the
/// DTO layer.
const COLUMNS: &str = "a.id, a.patient_id, pt.name AS patient_name, a.professional_id, \
                        u.name AS professional_name, a.scheduled_at, a.duration_minutes, \
                        a.session_cost::TEXT AS session_cost, a.status, a.notes, a.audio_note, \
                        a.created_at, a.updated_at";

const JOIN: &str = "LEFT JOIN patients pt ON pt.id = a.patient_id \
                    LEFT JOIN users u ON u.id = a.professional_id";

/// Provides CRUD operations for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a new appointment in `scheduled` status.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAppointment,
    ) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "WITH a AS (
                INSERT INTO appointments
                    (patient_id, professional_id, scheduled_at, duration_minutes,
                     session_cost, notes, audio_note)
                VALUES ($1, $2, $3, $4, CAST($5 AS NUMERIC(10, 2)), $6, $7)
                RETURNING *
             )
             SELECT {COLUMNS} FROM a {JOIN}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(input.patient_id)
            .bind(input.professional_id)
            .bind(input.scheduled_at)
            .bind(input.duration_minutes)
            .bind(input.session_cost)
            .bind(&input.notes)
            .bind(&input.audio_note)
            .fetch_one(pool)
            .await
    }

    /// Find an appointment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointments a {JOIN} WHERE a.id = $1");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List appointments, most recent first, optionally filtered by patient
    /// and/or professional.
    pub async fn list(
        pool: &PgPool,
        patient_id: Option<DbId>,
        professional_id: Option<DbId>,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments a {JOIN}
             WHERE ($1::BIGINT IS NULL OR a.patient_id = $1)
               AND ($2::BIGINT IS NULL OR a.professional_id = $2)
             ORDER BY a.scheduled_at DESC, a.id DESC"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(patient_id)
            .bind(professional_id)
            .fetch_all(pool)
            .await
    }

    /// Update an appointment. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAppointment,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "WITH a AS (
                UPDATE appointments SET
                    professional_id = COALESCE($2, professional_id),
                    scheduled_at = COALESCE($3, scheduled_at),
                    duration_minutes = COALESCE($4, duration_minutes),
                    session_cost = COALESCE(CAST($5 AS NUMERIC(10, 2)), session_cost),
                    status = COALESCE($6, status),
                    notes = COALESCE($7, notes),
                    audio_note = COALESCE($8, audio_note)
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM a {JOIN}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(input.professional_id)
            .bind(input.scheduled_at)
            .bind(input.duration_minutes)
            .bind(input.session_cost)
            .bind(&input.status)
            .bind(&input.notes)
            .bind(&input.audio_note)
            .fetch_optional(pool)
            .await
    }

    /// Delete an appointment by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
