//! Run constants and command-line defaults

// Pixel channel limits
/// Maximum value of a single color channel
pub const CHANNEL_MAX: u8 = 255;
/// Smallest channel value a region color may take (keeps regions distinct from black)
pub const REGION_CHANNEL_MIN: u8 = 1;
/// Largest channel value a region color may take
pub const REGION_CHANNEL_MAX: u8 = 253;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 16_384;

// Contour streams carry a format tag, a comment, the dimensions and the channel maximum
/// Number of header lines skipped before contour pixel triples
pub const CONTOUR_HEADER_LINES: usize = 4;

/// Format tag written at the top of the plain pixel map output
pub const PPM_MAGIC: &str = "P3";

// Default values for configurable parameters
/// Output file used when none is given on the command line
pub const DEFAULT_OUTPUT: &str = "output.ppm";

/// Parameter stream token selecting explicit start points
pub const EXPLICIT_POINTS_CHOICE: char = 'n';

// Seed salts keep boundary and coloring workers from sharing sequences
/// Salt mixed into boundary worker seeds
pub const BOUNDARY_SEED_SALT: u64 = 0x6c69_6e65_7300_0000;
/// Salt mixed into coloring worker seeds
pub const COLORING_SEED_SALT: u64 = 0x6669_6c6c_7300_0000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
