use thiserror::Error;

pub type QuoteResult<T> = Result<T, QuoteError>;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No pool found for pair {0}/{1}")]
    PoolNotFound(String, String),

    #[error("Invalid pool state: {0}")]
    InvalidPool(String),

    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl QuoteError {
    /// Short, stable name of the error kind, used by the CLI and in logs
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::InvalidRequest(_) => "InvalidRequest",
            QuoteError::PoolNotFound(..) => "PoolNotFound",
            QuoteError::InvalidPool(_) => "InvalidPool",
            QuoteError::ArithmeticOverflow(_) => "ArithmeticOverflow",
            QuoteError::ConfigError(_) => "ConfigError",
            QuoteError::SerializationError(_) => "SerializationError",
            QuoteError::Io(_) => "Io",
            QuoteError::Other(_) => "Other",
        }
    }
}

impl From<anyhow::Error> for QuoteError {
    fn from(err: anyhow::Error) -> Self {
        QuoteError::Other(err.to_string())
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::SerializationError(err.to_string())
    }
}
