use bsm_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Parse(e.to_string())
    }
}

impl CliError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CliError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
