use crate::model::GridError;
use crate::protocol::PayloadError;
use crate::remote::RemoteError;
use crate::render::RenderError;
use crate::script::ScriptError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("grid validation error: {0}")]
    Grid(#[from] GridError),

    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    #[error("remote service error: {0}")]
    Remote(#[from] RemoteError),

    #[error("render service error: {0}")]
    Render(#[from] RenderError),

    #[error("script service error: {0}")]
    Script(#[from] ScriptError),
}
