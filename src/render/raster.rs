use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::model::{Color, ColorGrid, Region};

use super::{RenderOptions, Result};

const DIM_ALPHA: f32 = 0.6;
const HIGHLIGHT: [u8; 3] = [255, 107, 53];
const HIGHLIGHT_ALPHA: f32 = 0.9;
const HIGHLIGHT_WIDTH: u32 = 2;
const GRID_LINE_ALPHA: f32 = 0.1;
const CROP_FILL: [u8; 3] = [255, 215, 0];
const CROP_FILL_ALPHA: f32 = 0.2;
const CROP_BORDER: [u8; 3] = [255, 165, 0];
const CROP_BORDER_ALPHA: f32 = 0.9;
const CROP_BORDER_WIDTH: u32 = 2;

pub fn render(
    grid: &ColorGrid,
    selection: Option<Color>,
    options: RenderOptions,
) -> Result<RgbaImage> {
    render_with_crop(grid, selection, None, options)
}

pub fn render_with_crop(
    grid: &ColorGrid,
    selection: Option<Color>,
    crop: Option<Region>,
    options: RenderOptions,
) -> Result<RgbaImage> {
    let (width, height) = options.surface_size(grid)?;
    let mut image = RgbaImage::new(width, height);
    if width == 0 || height == 0 {
        return Ok(image);
    }
    let cell = options.cell_size;

    fill_cells(&mut image, grid, selection, cell);
    if let Some(selected) = selection {
        outline_selected_cells(&mut image, grid, selected, cell);
    }
    draw_grid_lines(&mut image, grid, cell);
    if let Some(region) = crop {
        draw_crop_overlay(&mut image, region, cell);
    }
    Ok(image)
}

pub fn save_png(path: impl AsRef<Path>, image: &RgbaImage) -> Result<()> {
    image.save_with_format(path.as_ref(), ImageFormat::Png)?;
    Ok(())
}

fn fill_cells(image: &mut RgbaImage, grid: &ColorGrid, selection: Option<Color>, cell: u32) {
    let width = image.width() as usize;
    let cols = grid.cols();
    let cell = cell as usize;
    let fills = cell_fills(grid, selection);
    image
        .par_chunks_exact_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let offset = (y / cell) * cols;
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                pixel.copy_from_slice(&fills[offset + x / cell]);
            }
        });
}

fn cell_fills(grid: &ColorGrid, selection: Option<Color>) -> Vec<[u8; 4]> {
    grid.cells()
        .iter()
        .map(|color| {
            let channels = match selection {
                Some(selected) if *color != selected => {
                    blend(color.channels(), [0, 0, 0], DIM_ALPHA)
                }
                _ => color.channels(),
            };
            [channels[0], channels[1], channels[2], 255]
        })
        .collect()
}

fn outline_selected_cells(image: &mut RgbaImage, grid: &ColorGrid, selected: Color, cell: u32) {
    let thickness = HIGHLIGHT_WIDTH.min(cell / 2);
    if thickness == 0 {
        return;
    }
    for ((row, col), color) in grid.cells().indexed_iter() {
        if *color != selected {
            continue;
        }
        let x0 = col as u32 * cell;
        let y0 = row as u32 * cell;
        blend_ring(image, x0, y0, cell, cell, thickness, HIGHLIGHT, HIGHLIGHT_ALPHA);
    }
}

fn draw_grid_lines(image: &mut RgbaImage, grid: &ColorGrid, cell: u32) {
    let (width, height) = image.dimensions();
    for boundary in 0..=grid.cols() {
        let x = (boundary as u32 * cell).min(width - 1);
        for y in 0..height {
            blend_pixel(image, x, y, [0, 0, 0], GRID_LINE_ALPHA);
        }
    }
    for boundary in 0..=grid.rows() {
        let y = (boundary as u32 * cell).min(height - 1);
        for x in 0..width {
            blend_pixel(image, x, y, [0, 0, 0], GRID_LINE_ALPHA);
        }
    }
}

fn draw_crop_overlay(image: &mut RgbaImage, region: Region, cell: u32) {
    let x0 = region.min_col as u32 * cell;
    let y0 = region.min_row as u32 * cell;
    let width = region.cols() as u32 * cell;
    let height = region.rows() as u32 * cell;
    for dy in 0..height {
        for dx in 0..width {
            blend_pixel(image, x0 + dx, y0 + dy, CROP_FILL, CROP_FILL_ALPHA);
        }
    }
    let thickness = CROP_BORDER_WIDTH.min(width / 2).min(height / 2);
    blend_ring(image, x0, y0, width, height, thickness, CROP_BORDER, CROP_BORDER_ALPHA);
}

fn blend_ring(
    image: &mut RgbaImage,
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
    thickness: u32,
    overlay: [u8; 3],
    alpha: f32,
) {
    if thickness == 0 {
        return;
    }
    for dy in 0..height {
        for dx in 0..width {
            let edge = dx < thickness
                || dy < thickness
                || dx >= width - thickness
                || dy >= height - thickness;
            if edge {
                blend_pixel(image, x0 + dx, y0 + dy, overlay, alpha);
            }
        }
    }
}

fn blend_pixel(image: &mut RgbaImage, x: u32, y: u32, overlay: [u8; 3], alpha: f32) {
    let pixel = image.get_pixel_mut(x, y);
    let base = [pixel.0[0], pixel.0[1], pixel.0[2]];
    let blended = blend(base, overlay, alpha);
    *pixel = Rgba([blended[0], blended[1], blended[2], 255]);
}

fn blend(base: [u8; 3], overlay: [u8; 3], alpha: f32) -> [u8; 3] {
    let mix = |base: u8, over: u8| {
        (f32::from(over) * alpha + f32::from(base) * (1.0 - alpha)).round() as u8
    };
    [
        mix(base[0], overlay[0]),
        mix(base[1], overlay[1]),
        mix(base[2], overlay[2]),
    ]
}
