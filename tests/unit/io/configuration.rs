//! Tests for run constants

#[cfg(test)]
mod tests {
    use floodgrid::io::configuration::{
        BOUNDARY_SEED_SALT, CHANNEL_MAX, COLORING_SEED_SALT, CONTOUR_HEADER_LINES,
        DEFAULT_OUTPUT, EXPLICIT_POINTS_CHOICE, MAX_GRID_DIMENSION, REGION_CHANNEL_MAX,
        REGION_CHANNEL_MIN,
    };

    // Tests region channels differ from black and stay below white
    // Verified by raising the region channel maximum to 255
    #[test]
    fn test_region_channel_range_excludes_sentinels() {
        assert!(REGION_CHANNEL_MIN > 0);
        assert!(REGION_CHANNEL_MAX < CHANNEL_MAX);
        assert!(REGION_CHANNEL_MIN <= REGION_CHANNEL_MAX);
    }

    // Tests default values used by the command line and parser
    // Verified by sharing one salt between both phases
    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_OUTPUT, "output.ppm");
        assert_eq!(EXPLICIT_POINTS_CHOICE, 'n');
        assert_eq!(CONTOUR_HEADER_LINES, 4);
        assert!(MAX_GRID_DIMENSION >= 1024);
        assert_ne!(BOUNDARY_SEED_SALT, COLORING_SEED_SALT);
    }
}
