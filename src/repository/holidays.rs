//! Postgres-backed holiday store

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
    models::holiday::Holiday,
    repository::HolidayStore,
};

#[derive(Clone)]
pub struct HolidaysRepository {
    pool: Pool<Postgres>,
    operation_timeout: Duration,
}

impl HolidaysRepository {
    pub fn new(pool: Pool<Postgres>, config: &DatabaseConfig) -> Self {
        Self {
            pool,
            operation_timeout: Duration::from_secs(config.operation_timeout_secs),
        }
    }

    /// Bound a database call so a stalled backend cannot block a request
    /// indefinitely.
    async fn bounded<T, F>(&self, operation: &str, future: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        tokio::time::timeout(self.operation_timeout, future)
            .await
            .map_err(|_| AppError::Timeout(format!("{} did not complete in time", operation)))?
            .map_err(AppError::from)
    }
}

#[async_trait]
impl HolidayStore for HolidaysRepository {
    async fn ping(&self) -> AppResult<()> {
        self.bounded("ping", async {
            sqlx::query("SELECT 1").execute(&self.pool).await.map(|_| ())
        })
        .await
    }

    async fn list_all(&self) -> AppResult<Vec<Holiday>> {
        self.bounded("list_all", async {
            sqlx::query_as::<_, Holiday>("SELECT id, date, title, description FROM holidays")
                .fetch_all(&self.pool)
                .await
        })
        .await
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Holiday> {
        self.bounded("get_by_id", async {
            sqlx::query_as::<_, Holiday>(
                "SELECT id, date, title, description FROM holidays WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
        })
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Holiday {} not found", id)))
    }

    async fn insert(&self, holiday: Holiday) -> AppResult<Holiday> {
        let result = self
            .bounded("insert", async {
                sqlx::query_as::<_, Holiday>(
                    r#"
                    INSERT INTO holidays (id, date, title, description)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, date, title, description
                    "#,
                )
                .bind(holiday.id)
                .bind(holiday.date)
                .bind(&holiday.title)
                .bind(&holiday.description)
                .fetch_one(&self.pool)
                .await
            })
            .await;

        // The primary key enforces id uniqueness
        match result {
            Err(AppError::Database(e))
                if e.as_database_error().is_some_and(|d| d.is_unique_violation()) =>
            {
                Err(AppError::Conflict(format!(
                    "Holiday {} already exists",
                    holiday.id
                )))
            }
            other => other,
        }
    }

    async fn update(&self, holiday: Holiday) -> AppResult<Holiday> {
        self.bounded("update", async {
            sqlx::query_as::<_, Holiday>(
                r#"
                UPDATE holidays
                SET date = $2, title = $3, description = $4
                WHERE id = $1
                RETURNING id, date, title, description
                "#,
            )
            .bind(holiday.id)
            .bind(holiday.date)
            .bind(&holiday.title)
            .bind(&holiday.description)
            .fetch_optional(&self.pool)
            .await
        })
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Holiday {} not found", holiday.id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = self
            .bounded("delete", async {
                sqlx::query("DELETE FROM holidays WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await
            })
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Holiday {} not found", id)));
        }
        Ok(())
    }
}
