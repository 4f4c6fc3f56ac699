use std::path::Path;

use crate::editor::{EditorSession, Update};
use crate::model::ColorGrid;
use crate::protocol::{GridPayload, read_payload, write_payload};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct SessionService;

impl SessionService {
    pub fn receive(&self, session: &mut EditorSession, payload: GridPayload) -> Result<Update> {
        let grid = payload.into_grid()?;
        Ok(session.install_grid(grid))
    }

    pub fn load_file(
        &self,
        session: &mut EditorSession,
        path: impl AsRef<Path>,
    ) -> Result<Update> {
        let payload = read_payload(path)?;
        self.receive(session, payload)
    }

    pub fn save_file(&self, grid: &ColorGrid, path: impl AsRef<Path>) -> Result<()> {
        write_payload(path, &GridPayload::from_grid(grid))?;
        Ok(())
    }
}
