mod color;
mod error;
mod geometry;
mod grid;
mod stats;

#[cfg(test)]
mod tests;

pub use color::{Color, Rgb};
pub use error::{GridError, Result};
pub use geometry::{GridPos, Region};
pub use grid::{ColorGrid, GridSummary, PaletteEntry};
pub use stats::ColorStats;
