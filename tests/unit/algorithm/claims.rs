//! Tests for the mutex-guarded start point queue

#[cfg(test)]
mod tests {
    use floodgrid::FloodError;
    use floodgrid::algorithm::claims::{ClaimAttempt, ClaimQueue, StartPoints};
    use floodgrid::spatial::{Rgb, SharedGrid};
    use rand::{SeedableRng, rngs::StdRng};

    fn explicit(points: Vec<[usize; 2]>, size: usize) -> StartPoints {
        StartPoints::explicit(points, size, size).expect("points inside grid")
    }

    // Tests explicit points outside the grid are rejected up front
    // Verified by comparing rows with > instead of >= in the bounds check
    #[test]
    fn test_explicit_points_outside_grid_rejected() {
        let result = StartPoints::explicit(vec![[0, 0], [3, 1]], 3, 3);
        assert!(matches!(
            result,
            Err(FloodError::InvalidParameter {
                parameter: "start point",
                ..
            })
        ));
    }

    // Tests a successful claim reads the origin pixel and decrements the counter
    // Verified by moving the decrement onto the degenerate path
    #[test]
    fn test_claim_decrements_remaining() {
        let grid = SharedGrid::blank(4, 4).expect("valid dimensions");
        let queue = ClaimQueue::new(2, explicit(vec![[1, 2], [3, 3]], 4));
        let mut rng = StdRng::seed_from_u64(5);

        let ClaimAttempt::Claimed(claim) = queue.claim_next(&grid, &mut rng).expect("lock") else {
            unreachable!("white origin must be claimable");
        };
        assert_eq!(claim.origin, [1, 2]);
        assert_eq!(claim.original, Rgb::WHITE);
        assert_ne!(claim.color, Rgb::WHITE);
        assert_eq!(queue.remaining().expect("lock"), 1);
        assert_eq!(queue.requested(), 2);
    }

    // Tests claiming never paints; the fill seeds its own origin
    // Verified by painting the claim color while the lock is held
    #[test]
    fn test_claim_leaves_grid_untouched() {
        let grid = SharedGrid::blank(2, 2).expect("valid dimensions");
        let queue = ClaimQueue::new(1, explicit(vec![[0, 0]], 2));
        let mut rng = StdRng::seed_from_u64(1);
        let _ = queue.claim_next(&grid, &mut rng).expect("lock");
        assert_eq!(grid.get([0, 0]), Some(Rgb::WHITE));
    }

    // Tests the queue reports exhaustion once no fills are owed
    // Verified by removing the zero counter check from claim_next
    #[test]
    fn test_exhausted_once_counter_reaches_zero() {
        let grid = SharedGrid::blank(4, 4).expect("valid dimensions");
        let queue = ClaimQueue::new(1, StartPoints::Random);
        let mut rng = StdRng::seed_from_u64(9);

        assert!(matches!(
            queue.claim_next(&grid, &mut rng),
            Ok(ClaimAttempt::Claimed(_))
        ));
        assert_eq!(
            queue.claim_next(&grid, &mut rng).expect("lock"),
            ClaimAttempt::Exhausted
        );
        assert_eq!(queue.remaining().expect("lock"), 0);
    }

    // Tests a black origin is consumed without touching the counter
    // Verified by dropping the black check from the degenerate test
    #[test]
    fn test_black_origin_is_degenerate_and_retried() {
        let grid = SharedGrid::blank(3, 3).expect("valid dimensions");
        grid.set([0, 0], Rgb::BLACK);
        let queue = ClaimQueue::new(1, explicit(vec![[0, 0], [2, 2]], 3));
        let mut rng = StdRng::seed_from_u64(2);

        assert_eq!(
            queue.claim_next(&grid, &mut rng).expect("lock"),
            ClaimAttempt::Degenerate
        );
        assert_eq!(queue.remaining().expect("lock"), 1);

        let ClaimAttempt::Claimed(claim) = queue.claim_next(&grid, &mut rng).expect("lock") else {
            unreachable!("second point is white");
        };
        assert_eq!(claim.origin, [2, 2]);
        assert_eq!(queue.remaining().expect("lock"), 0);
    }

    // Tests a drawn color equal to the origin pixel is retried
    // Verified by dropping the color equality check from the degenerate test
    #[test]
    fn test_color_equal_to_origin_is_degenerate() {
        let grid = SharedGrid::blank(3, 3).expect("valid dimensions");
        let rng = StdRng::seed_from_u64(4);
        let mut probe = rng.clone();
        grid.set([1, 1], Rgb::random_region(&mut probe));

        let queue = ClaimQueue::new(1, explicit(vec![[1, 1]], 3));
        let mut rng = rng;
        assert_eq!(
            queue.claim_next(&grid, &mut rng).expect("lock"),
            ClaimAttempt::Degenerate
        );
        assert_eq!(queue.remaining().expect("lock"), 1);
    }

    // Tests an empty explicit list reports exhaustion with fills still owed
    // Verified by falling back to random points when the list runs dry
    #[test]
    fn test_explicit_list_running_dry_is_exhausted() {
        let grid = SharedGrid::blank(2, 2).expect("valid dimensions");
        grid.set([0, 1], Rgb::BLACK);
        let queue = ClaimQueue::new(1, explicit(vec![[0, 1]], 2));
        let mut rng = StdRng::seed_from_u64(6);

        assert_eq!(
            queue.claim_next(&grid, &mut rng).expect("lock"),
            ClaimAttempt::Degenerate
        );
        assert_eq!(
            queue.claim_next(&grid, &mut rng).expect("lock"),
            ClaimAttempt::Exhausted
        );
        assert_eq!(queue.remaining().expect("lock"), 1);
    }

    // Tests random mode keeps drawing until it lands on an open pixel
    // Verified by returning the first random draw without checking its pixel
    #[test]
    fn test_random_mode_finds_open_pixel() {
        let grid = SharedGrid::filled(4, 4, Rgb::BLACK).expect("valid dimensions");
        grid.set([3, 1], Rgb::WHITE);
        let queue = ClaimQueue::new(1, StartPoints::Random);
        let mut rng = StdRng::seed_from_u64(8);

        let mut degenerate = 0;
        let claim = loop {
            match queue.claim_next(&grid, &mut rng).expect("lock") {
                ClaimAttempt::Claimed(claim) => break claim,
                ClaimAttempt::Degenerate => degenerate += 1,
                ClaimAttempt::Exhausted => unreachable!("one fill is still owed"),
            }
        };

        assert_eq!(claim.origin, [3, 1]);
        assert!(degenerate < 10_000);
    }

    // Tests concurrent claimers never decrement past the requested count
    // Verified by decrementing the counter twice per claim
    #[test]
    fn test_concurrent_claims_match_requested_count() {
        let grid = SharedGrid::blank(8, 8).expect("valid dimensions");
        let queue = ClaimQueue::new(50, StartPoints::Random);

        let claimed: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4_u64)
                .map(|seed| {
                    let (grid, queue) = (&grid, &queue);
                    scope.spawn(move || {
                        let mut rng = StdRng::seed_from_u64(seed);
                        let mut count = 0;
                        loop {
                            match queue.claim_next(grid, &mut rng) {
                                Ok(ClaimAttempt::Claimed(_)) => count += 1,
                                Ok(ClaimAttempt::Degenerate) => {}
                                Ok(ClaimAttempt::Exhausted) | Err(_) => break count,
                            }
                        }
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or(0))
                .sum()
        });

        assert_eq!(claimed, 50);
        assert_eq!(queue.remaining().expect("lock"), 0);
    }
}
