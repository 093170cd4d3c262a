mod create_client;
mod delete_client;
mod get_client;
mod list_clients;
mod update_client;

pub use create_client::CreateClientUseCase;
pub use delete_client::DeleteClientUseCase;
pub use get_client::GetClientUseCase;
pub use list_clients::ListClientsUseCase;
pub use update_client::UpdateClientUseCase;
