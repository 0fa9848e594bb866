use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Elasticsearch error: {0}")]
    Elasticsearch(#[from] elasticsearch::Error),
    #[error("Elasticsearch transport error: {0}")]
    Transport(#[from] elasticsearch::http::transport::BuildError),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Elasticsearch returned status {0}")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, ShapeError>;

/// Why a raw extent could not be turned into two corners
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtentError {
    #[error("extent needs exactly 2 corners, got {0}")]
    CornerCount(usize),
    #[error("extent corner {corner} needs [lon, lat], got {len} values")]
    CornerArity { corner: usize, len: usize },
}
