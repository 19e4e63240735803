//! PNG export of finished grids and PNG contour loading

use image::{ImageBuffer, Rgb as ImageRgb, RgbImage};
use std::path::Path;

use crate::io::error::{FloodError, Result};
use crate::spatial::{Rgb, SharedGrid};

/// Convert the grid to an RGB image, one pixel per cell
pub fn grid_to_image(grid: &SharedGrid) -> RgbImage {
    let snapshot = grid.snapshot();
    let (rows, cols) = snapshot.dim();

    ImageBuffer::from_fn(cols as u32, rows as u32, |x, y| {
        let pixel = snapshot
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(Rgb::BLACK);
        ImageRgb(pixel.channels())
    })
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &SharedGrid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FloodError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    grid_to_image(grid)
        .save(output_path)
        .map_err(|e| FloodError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Load a contour grid from a PNG image of exactly `rows x cols` pixels
///
/// # Errors
///
/// Returns an error if the image cannot be decoded or its dimensions differ
pub fn load_contour_png(path: &Path, rows: usize, cols: usize) -> Result<SharedGrid> {
    let img = image::open(path).map_err(|e| FloodError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgb_img = img.to_rgb8();
    let (width, height) = rgb_img.dimensions();
    if width as usize != cols || height as usize != rows {
        return Err(FloodError::ContourFormat {
            reason: format!(
                "'{}' is {width}x{height} pixels, expected {cols}x{rows}",
                path.display()
            ),
        });
    }

    let pixels = rgb_img.pixels().map(|pixel| Rgb::from(pixel.0)).collect();
    SharedGrid::from_pixels(rows, cols, pixels)
}

/// Whether a contour path should be decoded as PNG
pub fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
