use std::io::Read;
use std::time::Duration;

use ureq::Agent;

use crate::protocol::{ExportRequest, GridPayload};

use super::multipart::{MultipartBody, content_type_for};
use super::{RemoteError, Result};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5001";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct ServiceClient {
    agent: Agent,
    base_url: String,
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ServiceClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for ServiceClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { agent, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upload(&self, filename: &str, bytes: &[u8]) -> Result<GridPayload> {
        self.post_multipart("upload", filename, bytes)
    }

    pub fn import_svg(&self, filename: &str, bytes: &[u8]) -> Result<GridPayload> {
        self.post_multipart("import_svg", filename, bytes)
    }

    pub fn export_svg(&self, request: &ExportRequest) -> Result<Vec<u8>> {
        let url = format!("{}/export_svg", self.base_url);
        let response = self
            .agent
            .post(&url)
            .send_json(request)
            .map_err(|error| match error {
                ureq::Error::Status(status, _) => RemoteError::Export { status },
                ureq::Error::Transport(transport) => {
                    RemoteError::Transport(transport.to_string())
                }
            })?;
        let mut bytes = Vec::new();
        response.into_reader().read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    fn post_multipart(&self, endpoint: &str, filename: &str, bytes: &[u8]) -> Result<GridPayload> {
        let url = format!("{}/{endpoint}", self.base_url);
        let part = MultipartBody::file("file", filename, content_type_for(filename), bytes);
        let response = self
            .agent
            .post(&url)
            .set("Content-Type", &part.content_type())
            .send_bytes(part.bytes());
        match response {
            Ok(response) => Ok(response.into_json::<GridPayload>()?),
            Err(ureq::Error::Status(status, response)) => Err(recover_rejection(status, response)),
            Err(ureq::Error::Transport(transport)) => {
                Err(RemoteError::Transport(transport.to_string()))
            }
        }
    }
}

fn recover_rejection(status: u16, response: ureq::Response) -> RemoteError {
    match response.into_json::<GridPayload>() {
        Ok(payload) => match payload.error {
            Some(message) => RemoteError::Rejected(message),
            None => RemoteError::Status(status),
        },
        Err(_) => RemoteError::Status(status),
    }
}
