mod postgres_client_repository;
mod query_builder;

pub use postgres_client_repository::PostgresClientRepository;
pub use query_builder::QueryBuilder;
