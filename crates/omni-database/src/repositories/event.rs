//! Health event repository implementation.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use omni_core::error::{AppError, ErrorKind};
use omni_core::result::AppResult;
use omni_entity::event::{Attachment, CreateEvent, HealthEvent, UpdateEvent};

/// Repository for health event CRUD operations.
///
/// Methods with a `_tx` suffix take an explicit connection so callers can
/// compose them into a transaction (event write + notification archive
/// commit or abort together).
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all events for a user, newest date first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<HealthEvent>> {
        sqlx::query_as::<_, HealthEvent>(
            "SELECT * FROM events WHERE user_id = $1 ORDER BY date DESC, start_time ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))
    }

    /// Find a single event by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<HealthEvent>> {
        sqlx::query_as::<_, HealthEvent>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event", e))
    }

    /// Take a transaction-scoped advisory lock for a (professional, date)
    /// pair.
    ///
    /// Serializes concurrent creates for the same professional and day so
    /// the overlap read cannot race another insert. Released automatically
    /// at commit or rollback.
    pub async fn lock_professional_day(
        &self,
        conn: &mut PgConnection,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<()> {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1), hashtext($2))")
            .bind(professional_id.to_string())
            .bind(date.to_string())
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to lock professional day", e)
            })?;
        Ok(())
    }

    /// Load all of a professional's events on a date, inside a
    /// transaction. Callers holding the advisory lock for the pair can
    /// apply the overlap predicate to the result without racing a
    /// concurrent insert.
    pub async fn find_by_professional_date_tx(
        &self,
        conn: &mut PgConnection,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<HealthEvent>> {
        sqlx::query_as::<_, HealthEvent>(
            "SELECT * FROM events WHERE professional_id = $1 AND date = $2",
        )
        .bind(professional_id)
        .bind(date)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to query events for day", e)
        })
    }

    /// Insert a new event within a transaction.
    pub async fn insert_tx(
        &self,
        conn: &mut PgConnection,
        data: &CreateEvent,
    ) -> AppResult<HealthEvent> {
        sqlx::query_as::<_, HealthEvent>(
            "INSERT INTO events \
             (title, description, observation, date, start_time, end_time, event_type, user_id, professional_id, attachments) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.observation)
        .bind(data.date)
        .bind(&data.start_time)
        .bind(&data.end_time)
        .bind(data.event_type)
        .bind(data.user_id)
        .bind(data.professional_id)
        .bind(sqlx::types::Json(&data.attachments))
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert event", e))
    }

    /// Update an event's fields within a transaction.
    pub async fn update_tx(
        &self,
        conn: &mut PgConnection,
        data: &UpdateEvent,
    ) -> AppResult<Option<HealthEvent>> {
        sqlx::query_as::<_, HealthEvent>(
            "UPDATE events SET \
             title = $2, description = $3, observation = $4, date = $5, \
             start_time = $6, end_time = $7, event_type = $8, professional_id = $9, \
             attachments = $10, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.observation)
        .bind(data.date)
        .bind(&data.start_time)
        .bind(&data.end_time)
        .bind(data.event_type)
        .bind(data.professional_id)
        .bind(sqlx::types::Json(&data.attachments))
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))
    }

    /// Update an event's fields outside a transaction.
    pub async fn update(&self, data: &UpdateEvent) -> AppResult<Option<HealthEvent>> {
        let mut conn = self.pool.acquire().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to acquire connection", e)
        })?;
        self.update_tx(&mut conn, data).await
    }

    /// Replace only the attachment list of an event.
    pub async fn update_attachments(
        &self,
        id: Uuid,
        attachments: &[Attachment],
    ) -> AppResult<Option<HealthEvent>> {
        sqlx::query_as::<_, HealthEvent>(
            "UPDATE events SET attachments = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(sqlx::types::Json(attachments))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update attachments", e))
    }

    /// Delete an event row. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;
        Ok(result.rows_affected() > 0)
    }
}
