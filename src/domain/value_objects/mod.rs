mod client_id;
mod sql_value;

pub use client_id::ClientId;
pub use sql_value::{ColumnKind, SqlValue};
