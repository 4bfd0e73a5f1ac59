//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, visitors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Visitor Kiosk API",
        version = "0.1.0",
        description = "Visitor check-in kiosk REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Visitors
        visitors::create_visitor,
        visitors::get_visitor,
        visitors::update_visitor,
    ),
    components(schemas(
        health::HealthResponse,
        visitors::CreatedResponse,
        crate::models::VisitorForm,
        crate::models::VisitorRecord,
        crate::models::VisitorStatus,
        crate::models::VisitorType,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "visitors", description = "Visitor lifecycle operations")
    )
)]
pub struct ApiDoc;

/// Create the router serving the OpenAPI document and Swagger UI
pub fn create_openapi_router() -> Router {
    Router::new().merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}
