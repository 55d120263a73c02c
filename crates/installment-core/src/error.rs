use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallmentError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for InstallmentError {
    fn from(e: serde_json::Error) -> Self {
        InstallmentError::SerializationError(e.to_string())
    }
}
