use serde::{Deserialize, Serialize};

use crate::model::{Color, ColorGrid};

pub const DEFAULT_EXPORT_CELL_SIZE: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub rows: usize,
    pub cols: usize,
    pub colors: Vec<Vec<Color>>,
    pub cell_size: u32,
}

impl ExportRequest {
    pub fn from_grid(grid: &ColorGrid, cell_size: u32) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            colors: grid.cell_rows(),
            cell_size,
        }
    }
}
