use thiserror::Error;

pub type Result<T> = std::result::Result<T, RemoteError>;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("service rejected the request: {0}")]
    Rejected(String),

    #[error("service returned status {0}")]
    Status(u16),

    #[error("export failed with status {status}")]
    Export { status: u16 },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("request I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
