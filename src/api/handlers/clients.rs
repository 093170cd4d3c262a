use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::errors::{ApiError, ErrorResponse};
use crate::application::dto::{
    ClientDto, CreateClientRequest, CreateClientResponse, MessageResponse,
};
use crate::application::use_cases::{
    CreateClientUseCase, DeleteClientUseCase, GetClientUseCase, ListClientsUseCase,
    UpdateClientUseCase,
};

/// GET /api/clients
/// List all clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "clients",
    responses(
        (status = 200, description = "All clients", body = [ClientDto]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_clients_handler(
    State(use_case): State<Arc<ListClientsUseCase>>,
) -> Result<Json<Vec<ClientDto>>, ApiError> {
    let clients = use_case
        .execute()
        .await
        .map_err(|e| ApiError::from(e).context("Error fetching clients"))?;

    Ok(Json(clients))
}

/// GET /api/clients/{client_id}
#[utoipa::path(
    get,
    path = "/api/clients/{client_id}",
    tag = "clients",
    params(
        ("client_id" = i64, Path, description = "Client identifier")
    ),
    responses(
        (status = 200, description = "The client", body = ClientDto),
        (status = 400, description = "Invalid client ID", body = ErrorResponse),
        (status = 404, description = "Client not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_client_handler(
    State(use_case): State<Arc<GetClientUseCase>>,
    Path(client_id): Path<String>,
) -> Result<Json<ClientDto>, ApiError> {
    let client = use_case
        .execute(&client_id)
        .await
        .map_err(|e| ApiError::from(e).context("Error fetching client"))?;

    Ok(Json(client))
}

/// POST /api/clients
/// Insert a client; the database assigns the key
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client created", body = CreateClientResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_client_handler(
    State(use_case): State<Arc<CreateClientUseCase>>,
    body: Result<Json<CreateClientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateClientResponse>), ApiError> {
    const CONTEXT: &str = "Error adding client";

    let Json(request) = body.map_err(|rejection| rejection_error(rejection, CONTEXT))?;

    let client_id = use_case
        .execute(request)
        .await
        .map_err(|e| ApiError::from(e).context(CONTEXT))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateClientResponse {
            message: "Client added successfully".to_string(),
            client_id,
        }),
    ))
}

/// PUT /api/clients/{client_id}
/// Partially update a client and, through `updatedCompany`, its company.
/// Keys that are absent leave their column untouched.
#[utoipa::path(
    put,
    path = "/api/clients/{client_id}",
    tag = "clients",
    params(
        ("client_id" = i64, Path, description = "Client identifier")
    ),
    request_body = crate::application::dto::UpdateClientRequest,
    responses(
        (status = 200, description = "Update applied or nothing to update", body = MessageResponse),
        (status = 400, description = "Invalid client ID, body or value", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_client_handler(
    State(use_case): State<Arc<UpdateClientUseCase>>,
    Path(client_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    const CONTEXT: &str = "Error updating client and company";

    let Json(body) = body.map_err(|rejection| rejection_error(rejection, CONTEXT))?;
    let Value::Object(fields) = body else {
        return Err(ApiError::bad_request("Request body must be a JSON object").context(CONTEXT));
    };

    use_case
        .execute(&client_id, &fields)
        .await
        .map_err(|e| ApiError::from(e).context(CONTEXT))?;

    Ok(Json(MessageResponse::new(
        "Client and associated company updated successfully",
    )))
}

/// DELETE /api/clients/{client_id}
/// Delete the client's companies, then the client
#[utoipa::path(
    delete,
    path = "/api/clients/{client_id}",
    tag = "clients",
    params(
        ("client_id" = i64, Path, description = "Client identifier")
    ),
    responses(
        (status = 200, description = "Client and companies deleted", body = MessageResponse),
        (status = 400, description = "Invalid client ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_client_handler(
    State(use_case): State<Arc<DeleteClientUseCase>>,
    Path(client_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    use_case.execute(&client_id).await.map_err(|e| {
        ApiError::from(e).context("Error deleting client and associated companies")
    })?;

    Ok(Json(MessageResponse::new(
        "Client and associated companies deleted successfully",
    )))
}

/// Malformed JSON, a missing content type or a body axum cannot decode is
/// answered with the usual error body instead of axum's plain text.
fn rejection_error(rejection: JsonRejection, context: &str) -> ApiError {
    ApiError::bad_request(rejection.body_text()).context(context)
}
