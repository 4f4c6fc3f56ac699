mod error;
mod options;
mod raster;


pub use error::{RenderError, Result};
pub use options::{DEFAULT_CELL_SIZE, RenderOptions};
pub use raster::{render, render_with_crop, save_png};
