use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::errors::ErrorResponse;
use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::application::dto::{
    ClientDto, CreateClientRequest, CreateClientResponse, MessageResponse, UpdateClientRequest,
    UpdateCompanyRequest,
};

/// OpenAPI specification for the client registry API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Client Registry API",
        version = "0.1.0",
        description = "Clients and their companies, with partial updates"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::clients::list_clients_handler,
        crate::api::handlers::clients::get_client_handler,
        crate::api::handlers::clients::create_client_handler,
        crate::api::handlers::clients::update_client_handler,
        crate::api::handlers::clients::delete_client_handler,
    ),
    components(
        schemas(
            ClientDto,
            CreateClientRequest,
            CreateClientResponse,
            UpdateClientRequest,
            UpdateCompanyRequest,
            MessageResponse,
            ErrorResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "clients", description = "Client and company records")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
