//! Shared pixel grid mutated concurrently by boundary and coloring workers
//!
//! Every pixel is stored packed in a single `AtomicU32`, so a pixel write is
//! one relaxed store and readers can never observe a mix of two colors.
//! No other synchronization is offered: concurrent fills race on purpose and
//! rely on the arbitration rule in [`crate::algorithm::flood`] for bounds.

use ndarray::Array2;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::color::Rgb;

/// The four 4-connected neighbour offsets, in expansion order
pub const NEIGHBOUR_OFFSETS: [[i64; 2]; 4] = [[1, 0], [-1, 0], [0, 1], [0, -1]];

/// Fixed-size grid of packed RGB pixels shared by reference across threads
#[derive(Debug)]
pub struct SharedGrid {
    cells: Array2<AtomicU32>,
    dimensions: (usize, usize),
}

impl SharedGrid {
    /// Create a grid with every pixel set to `fill`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the dimension limit
    pub fn filled(rows: usize, cols: usize, fill: Rgb) -> Result<Self> {
        validate_dimension("rows", rows)?;
        validate_dimension("cols", cols)?;

        let word = fill.pack();
        let cells = Array2::from_shape_fn((rows, cols), |_| AtomicU32::new(word));

        Ok(Self {
            cells,
            dimensions: (rows, cols),
        })
    }

    /// Create a blank (all white) grid
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the dimension limit
    pub fn blank(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, Rgb::WHITE)
    }

    /// Create a grid from pixels in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or the pixel count
    /// doesn't match `rows * cols`
    pub fn from_pixels(rows: usize, cols: usize, pixels: Vec<Rgb>) -> Result<Self> {
        validate_dimension("rows", rows)?;
        validate_dimension("cols", cols)?;

        let expected = rows * cols;
        if pixels.len() != expected {
            return Err(invalid_parameter(
                "pixels",
                &pixels.len(),
                &format!("expected {expected} pixels for a {rows}x{cols} grid"),
            ));
        }

        let words = pixels
            .into_iter()
            .map(|pixel| AtomicU32::new(pixel.pack()))
            .collect();
        let cells = Array2::from_shape_vec((rows, cols), words)
            .map_err(|e| invalid_parameter("pixels", &expected, &e))?;

        Ok(Self {
            cells,
            dimensions: (rows, cols),
        })
    }

    /// Get the number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Get the number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Convert signed coordinates to indices if they fall inside the grid
    pub fn index_of(&self, row: i64, col: i64) -> Option<[usize; 2]> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.rows() && col < self.cols()).then_some([row, col])
    }

    /// Read the pixel at `[row, col]`
    pub fn get(&self, position: [usize; 2]) -> Option<Rgb> {
        self.cells
            .get(position)
            .map(|cell| Rgb::unpack(cell.load(Ordering::Relaxed)))
    }

    /// Overwrite the pixel at `[row, col]`, returning whether it was in bounds
    pub fn set(&self, position: [usize; 2], color: Rgb) -> bool {
        self.cells.get(position).is_some_and(|cell| {
            cell.store(color.pack(), Ordering::Relaxed);
            true
        })
    }

    /// In-bounds 4-connected neighbours of a position
    pub fn neighbours(&self, position: [usize; 2]) -> impl Iterator<Item = [usize; 2]> + '_ {
        let [row, col] = position;
        NEIGHBOUR_OFFSETS.iter().filter_map(move |offset| {
            self.index_of(row as i64 + offset[0], col as i64 + offset[1])
        })
    }

    /// Count pixels satisfying a predicate
    pub fn count_where(&self, predicate: impl Fn(Rgb) -> bool) -> usize {
        self.cells
            .iter()
            .filter(|cell| predicate(Rgb::unpack(cell.load(Ordering::Relaxed))))
            .count()
    }

    /// Copy the current pixels into an owned array
    ///
    /// Only meaningful once all workers have joined.
    pub fn snapshot(&self) -> Array2<Rgb> {
        self.cells
            .map(|cell| Rgb::unpack(cell.load(Ordering::Relaxed)))
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
