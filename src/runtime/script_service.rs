use std::path::Path;

use crate::editor::EditorSession;
use crate::model::ColorGrid;
use crate::script::{EditScript, ScriptReport, load_script, run_script, save_report};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptService;

impl ScriptService {
    pub fn load_script(&self, path: impl AsRef<Path>) -> Result<EditScript> {
        Ok(load_script(path)?)
    }

    pub fn run(
        &self,
        script: &EditScript,
        grid: &ColorGrid,
    ) -> Result<(EditorSession, ScriptReport)> {
        Ok(run_script(script, grid)?)
    }

    pub fn save_report(&self, path: impl AsRef<Path>, report: &ScriptReport) -> Result<()> {
        save_report(path, report)?;
        Ok(())
    }
}
