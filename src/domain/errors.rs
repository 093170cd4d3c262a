use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid client ID: {0}")]
    InvalidClientId(String),

    #[error("Invalid value for {column}: {message}")]
    InvalidFieldValue { column: String, message: String },
}

impl DomainError {
    pub fn invalid_field(column: &str, message: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            column: column.to_string(),
            message: message.into(),
        }
    }
}
