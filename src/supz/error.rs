use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupzError {
    /// A required draft field was empty at commit time.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The media capability refused gallery access.
    #[error("gallery permission denied")]
    PermissionDenied,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SupzError>;
