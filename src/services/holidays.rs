//! Holidays service

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::holiday::{CreateHolidayRequest, Holiday, UpdateHolidayRequest},
    repository::HolidayStore,
};

#[derive(Clone)]
pub struct HolidaysService {
    store: Arc<dyn HolidayStore>,
}

impl HolidaysService {
    pub fn new(store: Arc<dyn HolidayStore>) -> Self {
        Self { store }
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    pub async fn list(&self) -> AppResult<Vec<Holiday>> {
        self.store.list_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Holiday> {
        self.store.get_by_id(id).await
    }

    /// Create a holiday, assigning an id when the caller did not supply one.
    /// The date string is validated here so nothing reaches the store on bad
    /// input.
    pub async fn create(&self, data: CreateHolidayRequest) -> AppResult<Holiday> {
        let date = parse_date(&data.date)?;
        let holiday = Holiday {
            id: data.id.unwrap_or_else(Uuid::new_v4),
            date,
            title: data.title,
            description: data.description,
        };
        self.store.insert(holiday).await
    }

    /// Replace all mutable fields of an existing holiday
    pub async fn update(&self, id: Uuid, data: UpdateHolidayRequest) -> AppResult<Holiday> {
        let date = parse_date(&data.date)?;
        let holiday = Holiday {
            id,
            date,
            title: data.title,
            description: data.description,
        };
        self.store.update(holiday).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.delete(id).await
    }
}

fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        AppError::Validation(format!("Invalid date '{}', use YYYY-MM-DD: {}", raw, e))
    })
}
