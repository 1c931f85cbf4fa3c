//! Notification repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use omni_core::error::{AppError, ErrorKind};
use omni_core::result::AppResult;
use omni_entity::notification::{Notification, NotificationStatus};

/// Repository for notification reads and status transitions.
///
/// Notifications are created by the inbound integration and never deleted
/// here; only their status moves.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List non-archived notifications for a user, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications \
             WHERE user_id = $1 AND status <> 'archived' \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    /// Find a notification by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification", e)
            })
    }

    /// Set a notification's status. Returns whether a row was updated.
    pub async fn set_status(&self, id: Uuid, status: NotificationStatus) -> AppResult<bool> {
        let result = sqlx::query("UPDATE notifications SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set notification status", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Set a notification's status within a transaction.
    ///
    /// Used by the event lifecycle service so the archive commits or
    /// aborts together with the event write.
    pub async fn set_status_tx(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        status: NotificationStatus,
    ) -> AppResult<bool> {
        let result = sqlx::query("UPDATE notifications SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set notification status", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
