pub mod clients;
pub mod health;

pub use clients::{
    create_client_handler, delete_client_handler, get_client_handler, list_clients_handler,
    update_client_handler,
};
pub use health::{health_handler, readiness_handler};
