use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Training corpus is empty")]
    EmptyCorpus,

    #[error("Label length mismatch: {predicted} predicted vs {actual} actual")]
    LengthMismatch { predicted: usize, actual: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SpamError {
    /// Whether the caller, not the server, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SpamError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, SpamError>;
