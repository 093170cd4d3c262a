mod client_repository;

pub use client_repository::{
    ClientChanges, ClientRepository, DeleteOutcome, RepositoryError, UpdateOutcome,
};

#[cfg(test)]
pub use client_repository::MockClientRepository;
