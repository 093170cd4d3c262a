use std::sync::Arc;

use tracing::info;

use crate::application::dto::CreateClientRequest;
use crate::application::errors::ClientUseCaseError;
use crate::application::ports::ClientRepository;
use crate::domain::entities::NewClient;
use crate::domain::value_objects::ClientId;

/// Use case: Add a client
pub struct CreateClientUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl CreateClientUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// Insert the client and return its new key
    ///
    /// Column values are coerced first; a bad value fails before the
    /// repository is called.
    pub async fn execute(
        &self,
        request: CreateClientRequest,
    ) -> Result<ClientId, ClientUseCaseError> {
        let new_client = NewClient::try_from(request)?;
        let client_id = self.repository.insert(&new_client).await?;

        info!(client_id = %client_id, "client_created");
        Ok(client_id)
    }
}
