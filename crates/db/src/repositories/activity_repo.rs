//! Repository for the `activities` table (append-only feed).

use clinic_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::{Activity, ActivityFilter, CreateActivity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, type, title, description, occurred_at, metadata, read, \
                        patient_id, professional_id, created_at";

/// Provides append, feed and read-state operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Append a new unread activity stamped with the current time.
    pub async fn create(pool: &PgPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (type, title, description, metadata, patient_id, professional_id)
             VALUES ($1, $2, $3, COALESCE($4, '{{}}'::jsonb), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.activity_type)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.metadata)
            .bind(input.patient_id)
            .bind(input.professional_id)
            .fetch_one(pool)
            .await
    }

    /// Append an activity as a side effect of another write.
    ///
    /// Failures are logged and swallowed; the caller's write has already
    /// happened and must not be undone by a feed entry.
    pub async fn record(pool: &PgPool, input: &CreateActivity) -> Option<Activity> {
        match Self::create(pool, input).await {
            Ok(activity) => Some(activity),
            Err(e) => {
                tracing::warn!(
                    activity_type = %input.activity_type,
                    patient_id = ?input.patient_id,
                    error = %e,
                    "Failed to record activity",
                );
                None
            }
        }
    }

    /// Find an activity by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List activities newest first with optional filters and pagination.
    ///
    /// Ties on `occurred_at` are broken by descending ID.
    pub async fn list(
        pool: &PgPool,
        filter: &ActivityFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities
             WHERE ($1::BIGINT IS NULL OR professional_id = $1)
               AND ($2::BIGINT IS NULL OR patient_id = $2)
               AND (NOT $3 OR read = false)
             ORDER BY occurred_at DESC, id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(filter.professional_id)
            .bind(filter.patient_id)
            .bind(filter.unread_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark one activity as read. Marking an already read activity is a
    /// no-op that still reports success.
    ///
    /// Returns `false` only when no activity with `id` exists.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE activities SET read = true WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark every unread activity as read, optionally scoped to a
    /// professional. Returns the number of rows flipped.
    pub async fn mark_all_read(
        pool: &PgPool,
        professional_id: Option<DbId>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE activities SET read = true
             WHERE read = false AND ($1::BIGINT IS NULL OR professional_id = $1)",
        )
        .bind(professional_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count unread activities, optionally scoped to a professional.
    pub async fn unread_count(
        pool: &PgPool,
        professional_id: Option<DbId>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM activities
             WHERE read = false AND ($1::BIGINT IS NULL OR professional_id = $1)",
        )
        .bind(professional_id)
        .fetch_one(pool)
        .await
    }
}
