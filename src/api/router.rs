use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    create_client_handler, delete_client_handler, get_client_handler, health_handler,
    list_clients_handler, readiness_handler, update_client_handler,
};
use crate::api::middleware::request_logging;
use crate::api::openapi::swagger_ui;
use crate::application::ports::ClientRepository;
use crate::application::use_cases::{
    CreateClientUseCase, DeleteClientUseCase, GetClientUseCase, ListClientsUseCase,
    UpdateClientUseCase,
};

/// Application state container
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub list_use_case: Arc<ListClientsUseCase>,
    pub get_use_case: Arc<GetClientUseCase>,
    pub create_use_case: Arc<CreateClientUseCase>,
    pub update_use_case: Arc<UpdateClientUseCase>,
    pub delete_use_case: Arc<DeleteClientUseCase>,
}

impl AppState {
    /// Wire every client use case to the same repository
    pub fn new(pool: Arc<PgPool>, repository: Arc<dyn ClientRepository>) -> Self {
        Self {
            pool,
            list_use_case: Arc::new(ListClientsUseCase::new(Arc::clone(&repository))),
            get_use_case: Arc::new(GetClientUseCase::new(Arc::clone(&repository))),
            create_use_case: Arc::new(CreateClientUseCase::new(Arc::clone(&repository))),
            update_use_case: Arc::new(UpdateClientUseCase::new(Arc::clone(&repository))),
            delete_use_case: Arc::new(DeleteClientUseCase::new(repository)),
        }
    }
}

/// Client bodies are small JSON objects
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create router with all routes and middleware
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        .route(
            "/api/clients",
            get(list_clients_handler)
                .with_state(state.list_use_case)
                .merge(post(create_client_handler).with_state(state.create_use_case)),
        )
        .route(
            "/api/clients/{client_id}",
            get(get_client_handler)
                .with_state(state.get_use_case)
                .merge(put(update_client_handler).with_state(state.update_use_case))
                .merge(delete(delete_client_handler).with_state(state.delete_use_case)),
        )
        .merge(swagger_ui())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(axum_middleware::from_fn(
            request_logging::request_logging_middleware,
        ))
        .layer(cors)
}
