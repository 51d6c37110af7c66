//! Holiday model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Holiday record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Holiday {
    pub id: Uuid,
    /// Calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Display title
    pub title: String,
    pub description: Option<String>,
}

/// Create holiday request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateHolidayRequest {
    /// Identifier; generated when absent
    pub id: Option<Uuid>,
    pub title: String,
    /// Holiday date (YYYY-MM-DD); parsed before the store is touched
    pub date: String,
    pub description: Option<String>,
}

/// Update holiday request; replaces all mutable fields wholesale
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateHolidayRequest {
    pub title: String,
    /// Holiday date (YYYY-MM-DD)
    pub date: String,
    pub description: Option<String>,
}

/// Confirmation payload for deletes
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn holiday_date_serializes_as_iso_string() {
        let holiday = Holiday {
            id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            title: "New Year".to_string(),
            description: None,
        };
        let value = serde_json::to_value(&holiday).unwrap();
        assert_eq!(value["date"], json!("2025-01-01"));
        assert_eq!(value["title"], json!("New Year"));
        assert!(value["description"].is_null());
    }

    #[test]
    fn create_request_accepts_missing_id_and_description() {
        let request: CreateHolidayRequest =
            serde_json::from_value(json!({"title": "New Year", "date": "2025-01-01"})).unwrap();
        assert!(request.id.is_none());
        assert!(request.description.is_none());
        assert_eq!(request.date, "2025-01-01");
    }
}
