//! Repository layer for database operations

pub mod holidays;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{config::DatabaseConfig, error::AppResult, models::holiday::Holiday};

/// Persistence contract for the holiday collection.
///
/// Handlers and services depend on this trait rather than on the pool, so
/// tests can substitute a mock store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HolidayStore: Send + Sync {
    /// Connectivity check; used at startup and by the readiness endpoint
    async fn ping(&self) -> AppResult<()>;

    /// Every record, order unspecified
    async fn list_all(&self) -> AppResult<Vec<Holiday>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Holiday>;

    async fn insert(&self, holiday: Holiday) -> AppResult<Holiday>;

    /// Replaces all mutable fields of the record matching `holiday.id`
    async fn update(&self, holiday: Holiday) -> AppResult<Holiday>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub holidays: holidays::HolidaysRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>, config: &DatabaseConfig) -> Self {
        Self {
            holidays: holidays::HolidaysRepository::new(pool.clone(), config),
            pool,
        }
    }
}
