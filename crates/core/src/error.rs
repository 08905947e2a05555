use thiserror::Error;

pub type AdsResult<T> = Result<T, AdsError>;

#[derive(Error, Debug)]
pub enum AdsError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
