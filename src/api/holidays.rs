//! Holidays API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::holiday::{CreateHolidayRequest, DeleteResponse, Holiday, UpdateHolidayRequest},
};

/// List all holidays
#[utoipa::path(
    get,
    path = "/holidays",
    tag = "holidays",
    responses(
        (status = 200, description = "Holidays list", body = Vec<Holiday>),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_holidays(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Holiday>>> {
    let holidays = state.services.holidays.list().await?;
    Ok(Json(holidays))
}

/// Get holiday by ID
#[utoipa::path(
    get,
    path = "/holidays/{id}",
    tag = "holidays",
    params(("id" = Uuid, Path, description = "Holiday ID")),
    responses(
        (status = 200, description = "Holiday details", body = Holiday),
        (status = 404, description = "No such holiday", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_holiday(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Holiday>> {
    let holiday = state.services.holidays.get_by_id(id).await?;
    Ok(Json(holiday))
}

/// Create a holiday
#[utoipa::path(
    post,
    path = "/holidays",
    tag = "holidays",
    request_body = CreateHolidayRequest,
    responses(
        (status = 201, description = "Holiday created", body = Holiday),
        (status = 400, description = "Malformed body or date", body = crate::error::ErrorResponse),
        (status = 409, description = "Duplicate id", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_holiday(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateHolidayRequest>, AppError>,
) -> AppResult<(StatusCode, Json<Holiday>)> {
    let holiday = state.services.holidays.create(data).await?;
    Ok((StatusCode::CREATED, Json(holiday)))
}

/// Update a holiday (full replace of date, title and description)
#[utoipa::path(
    put,
    path = "/holidays/{id}",
    tag = "holidays",
    params(("id" = Uuid, Path, description = "Holiday ID")),
    request_body = UpdateHolidayRequest,
    responses(
        (status = 200, description = "Holiday updated", body = Holiday),
        (status = 400, description = "Malformed body or date", body = crate::error::ErrorResponse),
        (status = 404, description = "No such holiday", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_holiday(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateHolidayRequest>, AppError>,
) -> AppResult<Json<Holiday>> {
    let holiday = state.services.holidays.update(id, data).await?;
    Ok(Json(holiday))
}

/// Delete a holiday
#[utoipa::path(
    delete,
    path = "/holidays/{id}",
    tag = "holidays",
    params(("id" = Uuid, Path, description = "Holiday ID")),
    responses(
        (status = 200, description = "Holiday deleted", body = DeleteResponse),
        (status = 404, description = "No such holiday", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_holiday(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.holidays.delete(id).await?;
    Ok(Json(DeleteResponse {
        message: "Holiday deleted successfully".to_string(),
    }))
}
