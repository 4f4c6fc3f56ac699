mod context;
mod error;
mod remote_service;
mod render_service;
mod script_service;
mod session_service;

#[cfg(test)]
mod tests;

pub use context::AppContext;
pub use error::{AppError, Result};
pub use remote_service::RemoteService;
pub use render_service::RenderService;
pub use script_service::ScriptService;
pub use session_service::SessionService;
