use ndarray::{Array2, ArrayView2, s};
use serde::{Deserialize, Serialize};

use super::{Color, ColorStats, GridError, GridPos, Region, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ColorGrid {
    cells: Array2<Color>,
    stats: ColorStats,
}

impl ColorGrid {
    pub fn new(rows: usize, cols: usize, cells: Vec<Vec<Color>>) -> Result<Self> {
        let cells = validate_cells(rows, cols, cells)?;
        let stats = ColorStats::tally(cells.iter().copied());
        Ok(Self { cells, stats })
    }

    pub fn with_stats(
        rows: usize,
        cols: usize,
        cells: Vec<Vec<Color>>,
        declared: ColorStats,
    ) -> Result<Self> {
        let grid = Self::new(rows, cols, cells)?;
        for (color, count) in declared.iter() {
            let actual = grid.stats.count(color);
            if actual != count {
                return Err(GridError::StatsMismatch {
                    color,
                    declared: count,
                    actual,
                });
            }
        }
        for (color, actual) in grid.stats.iter() {
            let count = declared.count(color);
            if count != actual {
                return Err(GridError::StatsMismatch {
                    color,
                    declared: count,
                    actual,
                });
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn stats(&self) -> &ColorStats {
        &self.stats
    }

    pub fn cells(&self) -> ArrayView2<'_, Color> {
        self.cells.view()
    }

    pub fn cell_rows(&self) -> Vec<Vec<Color>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn color_at(&self, pos: GridPos) -> Option<Color> {
        self.cells.get((pos.row, pos.col)).copied()
    }

    pub fn set_cell(&mut self, pos: GridPos, color: Color) -> Result<bool> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let current = self.cells[[pos.row, pos.col]];
        if current == color {
            return Ok(false);
        }
        self.cells[[pos.row, pos.col]] = color;
        self.stats.remove(current);
        self.stats.add(color);
        Ok(true)
    }

    pub fn crop(&mut self, region: Region) -> Result<()> {
        if region.min_row > region.max_row || region.min_col > region.max_col {
            return Err(GridError::InvalidRegion {
                min_row: region.min_row,
                max_row: region.max_row,
                min_col: region.min_col,
                max_col: region.max_col,
            });
        }
        if region.max_row >= self.rows() || region.max_col >= self.cols() {
            return Err(GridError::OutOfBounds {
                row: region.max_row,
                col: region.max_col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let cropped = self
            .cells
            .slice(s![
                region.min_row..=region.max_row,
                region.min_col..=region.max_col
            ])
            .to_owned();
        self.stats = ColorStats::tally(cropped.iter().copied());
        self.cells = cropped;
        Ok(())
    }

    pub fn summary(&self) -> GridSummary {
        let palette = self
            .stats
            .sorted_usage()
            .into_iter()
            .map(|(color, count)| PaletteEntry {
                color,
                rgb: color.rgb().to_string(),
                count,
            })
            .collect();
        GridSummary {
            rows: self.rows(),
            cols: self.cols(),
            total_colors: self.stats.distinct(),
            palette,
        }
    }
}

fn validate_cells(rows: usize, cols: usize, cells: Vec<Vec<Color>>) -> Result<Array2<Color>> {
    if (rows == 0) != (cols == 0) {
        return Err(GridError::InvalidShape { rows, cols });
    }
    if cells.len() != rows {
        return Err(GridError::RowCountMismatch {
            declared: rows,
            actual: cells.len(),
        });
    }
    for (index, row) in cells.iter().enumerate() {
        if row.len() != cols {
            return Err(GridError::RowLengthMismatch {
                row: index,
                expected: cols,
                actual: row.len(),
            });
        }
    }
    let flat = cells.into_iter().flatten().collect::<Vec<_>>();
    Ok(Array2::from_shape_vec((rows, cols), flat).expect("shape checked"))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteEntry {
    pub color: Color,
    pub rgb: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridSummary {
    pub rows: usize,
    pub cols: usize,
    pub total_colors: usize,
    pub palette: Vec<PaletteEntry>,
}
