use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Draw value must be positive, got {0}")]
    NonPositiveValue(i64),

    #[error("Invalid draw configuration: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde")]
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
