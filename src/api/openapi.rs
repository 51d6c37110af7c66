//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, holidays};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Holidays API",
        version = "0.2.0",
        description = "REST API for managing company holidays",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Holidays
        holidays::list_holidays,
        holidays::get_holiday,
        holidays::create_holiday,
        holidays::update_holiday,
        holidays::delete_holiday,
    ),
    components(
        schemas(
            crate::models::holiday::Holiday,
            crate::models::holiday::CreateHolidayRequest,
            crate::models::holiday::UpdateHolidayRequest,
            crate::models::holiday::DeleteResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "holidays", description = "Holiday management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
