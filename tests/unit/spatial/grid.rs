//! Tests for the shared grid accessors and concurrent writes

#[cfg(test)]
mod tests {
    use floodgrid::FloodError;
    use floodgrid::spatial::{Rgb, SharedGrid};
    use std::collections::HashSet;

    // Tests a blank grid has the requested shape and is white
    // Verified by filling blank grids with black
    #[test]
    fn test_blank_grid_is_white() {
        let grid = SharedGrid::blank(3, 4).expect("valid dimensions");
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.count_where(|pixel| pixel == Rgb::WHITE), 12);
    }

    // Tests zero dimensions are rejected
    // Verified by removing the zero check in validate_dimension
    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            SharedGrid::blank(0, 4),
            Err(FloodError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
        assert!(SharedGrid::blank(4, 0).is_err());
    }

    // Tests pixels are laid out row-major and counted
    // Verified by building the array in column-major order
    #[test]
    fn test_from_pixels_is_row_major() {
        let pixels = vec![
            Rgb::new(1, 0, 0),
            Rgb::new(2, 0, 0),
            Rgb::new(3, 0, 0),
            Rgb::new(4, 0, 0),
            Rgb::new(5, 0, 0),
            Rgb::new(6, 0, 0),
        ];
        let grid = SharedGrid::from_pixels(2, 3, pixels).expect("matching pixel count");

        assert_eq!(grid.get([0, 2]), Some(Rgb::new(3, 0, 0)));
        assert_eq!(grid.get([1, 0]), Some(Rgb::new(4, 0, 0)));
        assert!(SharedGrid::from_pixels(2, 3, vec![Rgb::WHITE; 5]).is_err());
    }

    // Tests signed coordinates outside the grid have no index
    // Verified by comparing with <= instead of < in index_of
    #[test]
    fn test_index_of_bounds() {
        let grid = SharedGrid::blank(2, 3).expect("valid dimensions");
        assert_eq!(grid.index_of(0, 0), Some([0, 0]));
        assert_eq!(grid.index_of(1, 2), Some([1, 2]));
        assert_eq!(grid.index_of(-1, 0), None);
        assert_eq!(grid.index_of(0, -1), None);
        assert_eq!(grid.index_of(2, 0), None);
        assert_eq!(grid.index_of(0, 3), None);
    }

    // Tests out of bounds reads and writes are refused
    // Verified by reporting every write as in bounds
    #[test]
    fn test_get_and_set_are_bounds_checked() {
        let grid = SharedGrid::blank(2, 2).expect("valid dimensions");
        assert!(grid.set([1, 1], Rgb::BLACK));
        assert_eq!(grid.get([1, 1]), Some(Rgb::BLACK));
        assert!(!grid.set([2, 0], Rgb::BLACK));
        assert_eq!(grid.get([0, 2]), None);
    }

    // Tests neighbours are 4-connected, in bounds and in expansion order
    // Verified by adding diagonal offsets to the neighbour table
    #[test]
    fn test_neighbours_are_four_connected_and_in_bounds() {
        let grid = SharedGrid::blank(3, 3).expect("valid dimensions");

        let corner: HashSet<_> = grid.neighbours([0, 0]).collect();
        assert_eq!(corner, HashSet::from([[1, 0], [0, 1]]));

        let edge: HashSet<_> = grid.neighbours([0, 1]).collect();
        assert_eq!(edge, HashSet::from([[1, 1], [0, 2], [0, 0]]));

        let centre: Vec<_> = grid.neighbours([1, 1]).collect();
        assert_eq!(centre, vec![[2, 1], [0, 1], [1, 2], [1, 0]]);
    }

    // Tests a snapshot copies every current pixel
    // Verified by snapshotting a blank grid of the same shape
    #[test]
    fn test_snapshot_copies_current_pixels() {
        let grid = SharedGrid::blank(2, 2).expect("valid dimensions");
        grid.set([0, 1], Rgb::new(9, 8, 7));

        let snapshot = grid.snapshot();
        assert_eq!(snapshot.dim(), (2, 2));
        assert_eq!(snapshot.get([0, 1]), Some(&Rgb::new(9, 8, 7)));
        assert_eq!(snapshot.get([1, 1]), Some(&Rgb::WHITE));
    }

    // Tests racing writers leave every pixel equal to one writer's color
    // Verified by writing only the red channel in set
    #[test]
    fn test_concurrent_writes_never_tear_pixels() {
        let grid = SharedGrid::blank(16, 16).expect("valid dimensions");
        let colors = [Rgb::new(10, 20, 30), Rgb::new(200, 100, 50)];

        std::thread::scope(|scope| {
            for color in colors {
                let grid = &grid;
                scope.spawn(move || {
                    for _ in 0..50 {
                        for row in 0..16 {
                            for col in 0..16 {
                                grid.set([row, col], color);
                            }
                        }
                    }
                });
            }
        });

        assert_eq!(
            grid.count_where(|pixel| colors.contains(&pixel)),
            16 * 16
        );
    }
}
