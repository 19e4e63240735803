/// Command-line interface and run driver
pub mod cli;
/// Run constants and defaults
pub mod configuration;
/// Error types for all operations
pub mod error;
/// PNG export and PNG contour loading
pub mod image;
/// Terminal logging setup
pub mod logging;
/// Parameter stream parsing
pub mod params;
/// Plain pixel map output and contour loading
pub mod ppm;
/// Progress bars for worker phases
pub mod progress;
