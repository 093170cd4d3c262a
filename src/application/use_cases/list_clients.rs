use std::sync::Arc;

use crate::application::dto::ClientDto;
use crate::application::errors::ClientUseCaseError;
use crate::application::ports::ClientRepository;

/// Use case: List every client
pub struct ListClientsUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl ListClientsUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<ClientDto>, ClientUseCaseError> {
        let clients = self.repository.list().await?;

        Ok(clients.into_iter().map(ClientDto::from).collect())
    }
}
