use crate::model::GridError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayloadError>;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("service rejected the image: {0}")]
    Rejected(String),

    #[error("declared total of {declared} colors does not match {actual} distinct colors")]
    TotalColorsMismatch { declared: usize, actual: usize },

    #[error("grid validation failed: {0}")]
    Grid(#[from] GridError),

    #[error("payload I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("payload serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("payload YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
}
