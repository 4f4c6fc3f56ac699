use std::path::Path;

use image::RgbaImage;

use crate::editor::EditorSession;
use crate::model::{Color, ColorGrid};
use crate::render::{RenderOptions, render, render_with_crop, save_png};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderService;

impl RenderService {
    pub fn render_grid(
        &self,
        grid: &ColorGrid,
        selection: Option<Color>,
        options: RenderOptions,
    ) -> Result<RgbaImage> {
        Ok(render(grid, selection, options)?)
    }

    pub fn render_session(
        &self,
        session: &EditorSession,
        options: RenderOptions,
    ) -> Result<Option<RgbaImage>> {
        let Some(grid) = session.grid() else {
            return Ok(None);
        };
        let crop = session.drag().active_region();
        Ok(Some(render_with_crop(
            grid,
            session.selection(),
            crop,
            options,
        )?))
    }

    pub fn save_png(&self, path: impl AsRef<Path>, image: &RgbaImage) -> Result<()> {
        save_png(path, image)?;
        Ok(())
    }
}
