use crate::model::GridError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScriptError>;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script parse failure: {0}")]
    Parse(String),

    #[error("script I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("script serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("script YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("step execution failed: {0}")]
    Step(#[from] GridError),
}
