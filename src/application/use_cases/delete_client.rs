use std::sync::Arc;

use tracing::info;

use crate::application::errors::ClientUseCaseError;
use crate::application::ports::{ClientRepository, DeleteOutcome};
use crate::domain::value_objects::ClientId;

/// Use case: Delete a client together with its companies
pub struct DeleteClientUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl DeleteClientUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, client_id: &str) -> Result<DeleteOutcome, ClientUseCaseError> {
        let id: ClientId = client_id.parse()?;

        let outcome = self.repository.delete(&id).await?;

        info!(
            client_id = %id,
            clients_deleted = outcome.clients_deleted,
            companies_deleted = outcome.companies_deleted,
            "client_deleted"
        );
        Ok(outcome)
    }
}
