use std::sync::Arc;

use crate::application::dto::ClientDto;
use crate::application::errors::ClientUseCaseError;
use crate::application::ports::ClientRepository;
use crate::domain::value_objects::ClientId;

/// Use case: Fetch a single client
pub struct GetClientUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl GetClientUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, client_id: &str) -> Result<ClientDto, ClientUseCaseError> {
        let id: ClientId = client_id.parse()?;

        let client = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ClientUseCaseError::NotFound(id.to_string()))?;

        Ok(client.into())
    }
}
