use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrikerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    ConfigError(String),

    #[error("Malformed bank record at {file}:{line}: {message}")]
    MalformedRecord {
        file: String,
        line: usize,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, StrikerError>;
