use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface {rows}x{cols} at cell size {cell_size} overflows the pixel range")]
    SurfaceOverflow {
        rows: usize,
        cols: usize,
        cell_size: u32,
    },

    #[error("raster encode failure: {0}")]
    Image(#[from] image::ImageError),
}
