//! Concurrent region flood fill over a shared pixel grid
//!
//! A blank grid is carved into separate cells by randomly wandering black
//! lines, or loaded from a contour image, then a pool of workers floods
//! regions from claimed start points with random colors. Fills run without
//! per-pixel locks; conflicts over a pixel are settled by comparing the red
//! channels of the competing colors.

#![forbid(unsafe_code)]

/// Boundary carving, start point claiming and concurrent flood fill
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Pixel values and the shared grid
pub mod spatial;

pub use io::error::{FloodError, Result};
