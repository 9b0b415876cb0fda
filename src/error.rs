use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubgenError {
    #[error("Malformed input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown type: {0}. Use 'timed' or 'simple'")]
    UnknownType(String),

    #[error("Invalid {kind} request: {message}")]
    InvalidRequest { kind: &'static str, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SubgenError>;
