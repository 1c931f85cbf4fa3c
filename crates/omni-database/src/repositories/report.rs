//! Report repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use omni_core::error::{AppError, ErrorKind};
use omni_core::result::AppResult;
use omni_entity::report::{Report, ReportStatus};

/// Repository for issued reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a report by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Report>> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find report", e))
    }

    /// Set a report's status, stamping `viewed_at` on the first view.
    /// Returns whether a row was updated.
    pub async fn set_status(&self, id: Uuid, status: ReportStatus) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE reports SET status = $2, \
             viewed_at = CASE WHEN $2 = 'viewed'::report_status AND viewed_at IS NULL \
                              THEN NOW() ELSE viewed_at END \
             WHERE id = $1",
        )
        .bind(id)
        .bind(status)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set report status", e))?;
        Ok(result.rows_affected() > 0)
    }
}
