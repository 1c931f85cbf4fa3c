//! Professional repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use omni_core::error::{AppError, ErrorKind};
use omni_core::result::AppResult;
use omni_entity::professional::{CreateProfessional, Professional};

/// Repository for professional records.
#[derive(Debug, Clone)]
pub struct ProfessionalRepository {
    pool: PgPool,
}

impl ProfessionalRepository {
    /// Create a new professional repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List professionals registered in a user's agenda.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Professional>> {
        sqlx::query_as::<_, Professional>(
            "SELECT * FROM professionals WHERE user_id = $1 ORDER BY name ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list professionals", e))
    }

    /// Find a professional by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Professional>> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find professional", e)
            })
    }

    /// Find a professional by name (case-insensitive) within a user's
    /// agenda. Used to resolve the doctor named by a lab notification.
    pub async fn find_by_name(&self, user_id: Uuid, name: &str) -> AppResult<Option<Professional>> {
        sqlx::query_as::<_, Professional>(
            "SELECT * FROM professionals WHERE user_id = $1 AND LOWER(name) = LOWER($2)",
        )
        .bind(user_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find professional by name", e)
        })
    }

    /// Register a new professional.
    pub async fn create(&self, data: &CreateProfessional) -> AppResult<Professional> {
        sqlx::query_as::<_, Professional>(
            "INSERT INTO professionals (user_id, name, specialty) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.specialty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create professional", e))
    }
}
