use crate::model::{ColorGrid, GridPos};

use super::{RenderError, Result};

pub const DEFAULT_CELL_SIZE: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub cell_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl RenderOptions {
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    pub fn surface_size(&self, grid: &ColorGrid) -> Result<(u32, u32)> {
        let width = (grid.cols() as u32).checked_mul(self.cell_size);
        let height = (grid.rows() as u32).checked_mul(self.cell_size);
        let Some(size) = width.zip(height) else {
            return Err(RenderError::SurfaceOverflow {
                rows: grid.rows(),
                cols: grid.cols(),
                cell_size: self.cell_size,
            });
        };
        Ok(size)
    }

    pub fn cell_at(&self, x: u32, y: u32, grid: &ColorGrid) -> Option<GridPos> {
        if self.cell_size == 0 {
            return None;
        }
        let pos = GridPos::new((y / self.cell_size) as usize, (x / self.cell_size) as usize);
        if grid.contains(pos) {
            Some(pos)
        } else {
            None
        }
    }
}
