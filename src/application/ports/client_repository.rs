use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Client, NewClient};
use crate::domain::partial_update::UpdatePlan;
use crate::domain::value_objects::{ClientId, SqlValue};
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Typed update plans for a client row and its company row
#[derive(Debug, Clone, PartialEq)]
pub struct ClientChanges {
    pub client: UpdatePlan<ClientId, SqlValue>,
    pub company: UpdatePlan<ClientId, SqlValue>,
}

impl ClientChanges {
    /// True when neither table has anything to write
    pub fn is_noop(&self) -> bool {
        self.client.is_noop() && self.company.is_noop()
    }
}

/// Rows touched by `ClientRepository::update`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub clients_updated: u64,
    pub companies_updated: u64,
}

/// Rows removed by `ClientRepository::delete`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub clients_deleted: u64,
    pub companies_deleted: u64,
}

/// Port for client and company persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// All clients, in key order
    async fn list(&self) -> Result<Vec<Client>, RepositoryError>;

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, RepositoryError>;

    /// Insert a client and return the key assigned by the database
    async fn insert(&self, client: &NewClient) -> Result<ClientId, RepositoryError>;

    /// Execute the non-empty plans of `changes`, client first.
    /// NoOp plans must not reach the database.
    async fn update(&self, changes: &ClientChanges) -> Result<UpdateOutcome, RepositoryError>;

    /// Delete the client's companies, then the client
    async fn delete(&self, id: &ClientId) -> Result<DeleteOutcome, RepositoryError>;
}
