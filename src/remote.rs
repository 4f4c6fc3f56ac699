mod client;
mod error;
mod multipart;

#[cfg(test)]
mod tests;

pub use client::{DEFAULT_SERVER_URL, ServiceClient};
pub use error::{RemoteError, Result};
pub use multipart::{MultipartBody, content_type_for};
