//! Spatial data structures shared by every phase
//!
//! This module contains:
//! - The pixel value type and region color selection
//! - The concurrently shared pixel grid

/// RGB pixel values and random region colors
pub mod color;
/// Shared grid with lock-free pixel access
pub mod grid;

pub use color::Rgb;
pub use grid::SharedGrid;
