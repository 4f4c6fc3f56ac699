use std::fs;
use std::path::Path;

use crate::model::ColorGrid;
use crate::protocol::{ExportRequest, GridPayload};
use crate::remote::{RemoteError, ServiceClient};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct RemoteService;

impl RemoteService {
    pub fn client(&self, base_url: impl Into<String>) -> ServiceClient {
        ServiceClient::new(base_url)
    }

    pub fn recognize_file(
        &self,
        client: &ServiceClient,
        path: impl AsRef<Path>,
    ) -> Result<GridPayload> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(RemoteError::Io)?;
        Ok(client.upload(&file_name(path), &bytes)?)
    }

    pub fn import_file(
        &self,
        client: &ServiceClient,
        path: impl AsRef<Path>,
    ) -> Result<GridPayload> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(RemoteError::Io)?;
        Ok(client.import_svg(&file_name(path), &bytes)?)
    }

    pub fn export(
        &self,
        client: &ServiceClient,
        grid: &ColorGrid,
        cell_size: u32,
    ) -> Result<Vec<u8>> {
        let request = ExportRequest::from_grid(grid, cell_size);
        Ok(client.export_svg(&request)?)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string()
}
