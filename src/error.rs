use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProofDropError {
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("source `{0}` requires an input file (--input or [source] path)")]
    MissingSourceInput(String),

    #[error("malformed source data: {0}")]
    SourceFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ProofDropError>;
