//! Concurrent multi-region flood fill with red-channel arbitration
//!
//! Workers claim start points from a [`ClaimQueue`] and then expand a private
//! breadth-first frontier directly against the shared grid, without locks.
//! When a fill reaches a cell another fill has already repainted, the red
//! channels decide: a fill whose red is strictly lower than the color already
//! present concedes and abandons its frontier, otherwise it paints over.
//! Fills with equal red race freely for contested cells.

use indicatif::ProgressBar;
use log::debug;
use std::collections::VecDeque;

use crate::algorithm::claims::{Claim, ClaimAttempt, ClaimQueue};
use crate::algorithm::seeding::SeedSource;
use crate::io::configuration::COLORING_SEED_SALT;
use crate::io::error::{FloodError, Result, invalid_parameter};
use crate::spatial::{Rgb, SharedGrid};

/// How a single fill ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillOutcome {
    /// Frontier emptied; the region is fully claimed or bounded
    Exhausted {
        /// Pixels written by this fill, seed included
        painted: usize,
    },
    /// Met a stronger concurrent fill and gave up the rest of the frontier
    Conceded {
        /// Pixels written before conceding, seed included
        painted: usize,
    },
}

impl FillOutcome {
    /// Pixels written by the fill
    pub const fn painted(self) -> usize {
        match self {
            Self::Exhausted { painted } | Self::Conceded { painted } => painted,
        }
    }
}

/// Whether a pixel may be painted by a fill of `color`
///
/// Black is a permanent obstacle; a pixel already holding the fill's own
/// color is never enqueued twice, which bounds the expansion.
pub fn is_candidate(current: Rgb, color: Rgb) -> bool {
    !current.is_black() && current != color
}

/// Whether a fill should give way on a contested pixel
///
/// A pixel no longer holding the seed region's original value was repainted
/// by another fill. Only the red channels are compared.
pub fn should_concede(current: Rgb, original: Rgb, color: Rgb) -> bool {
    current != original && color.red < current.red
}

/// Run one fill to exhaustion or concession
///
/// Paints the origin, then expands 4-connected neighbours breadth first.
pub fn flood_region(grid: &SharedGrid, claim: &Claim) -> FillOutcome {
    let mut frontier = VecDeque::new();
    if !grid.set(claim.origin, claim.color) {
        return FillOutcome::Exhausted { painted: 0 };
    }
    frontier.push_back(claim.origin);
    let mut painted = 1;

    while let Some(cell) = frontier.pop_front() {
        for neighbour in grid.neighbours(cell) {
            let Some(current) = grid.get(neighbour) else {
                continue;
            };
            if !is_candidate(current, claim.color) {
                continue;
            }
            if should_concede(current, claim.original, claim.color) {
                return FillOutcome::Conceded { painted };
            }
            grid.set(neighbour, claim.color);
            frontier.push_back(neighbour);
            painted += 1;
        }
    }

    FillOutcome::Exhausted { painted }
}

/// Totals reported after coloring
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColoringReport {
    /// Every fill that was claimed, in per-worker claim order
    pub claims: Vec<Claim>,
    /// Fills whose frontier emptied
    pub exhausted: usize,
    /// Fills that conceded to a stronger fill
    pub conceded: usize,
    /// Degenerate start points that were retried
    pub degenerate: usize,
    /// Pixel writes across all fills, counting overwrites
    pub painted: usize,
}

impl ColoringReport {
    /// Number of fills that started (equals the counter decrements)
    pub const fn fills_started(&self) -> usize {
        self.claims.len()
    }

    fn record(&mut self, claim: Claim, outcome: FillOutcome) {
        self.claims.push(claim);
        self.painted += outcome.painted();
        match outcome {
            FillOutcome::Exhausted { .. } => self.exhausted += 1,
            FillOutcome::Conceded { .. } => self.conceded += 1,
        }
    }

    fn absorb(&mut self, other: Self) {
        self.claims.extend(other.claims);
        self.exhausted += other.exhausted;
        self.conceded += other.conceded;
        self.degenerate += other.degenerate;
        self.painted += other.painted;
    }
}

/// Worker pool that floods regions of a shared grid
#[derive(Clone, Copy, Debug)]
pub struct Colorer {
    workers: usize,
    seeds: SeedSource,
}

impl Colorer {
    /// Configure a colorer
    ///
    /// # Errors
    ///
    /// Returns an error if `workers` is zero
    pub fn new(workers: usize, seeds: SeedSource) -> Result<Self> {
        if workers == 0 {
            return Err(invalid_parameter(
                "threads",
                &workers,
                &"at least one worker is required",
            ));
        }
        Ok(Self { workers, seeds })
    }

    /// Run all workers until the queue is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if a worker panics or the queue lock is poisoned
    pub fn run(
        &self,
        grid: &SharedGrid,
        queue: &ClaimQueue,
        progress: &ProgressBar,
    ) -> Result<ColoringReport> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..self.workers)
                .map(|worker_id| {
                    let seeds = self.seeds;
                    scope.spawn(move || color_worker(worker_id, seeds, grid, queue, progress))
                })
                .collect();

            let mut total = ColoringReport::default();
            for (worker, handle) in handles.into_iter().enumerate() {
                let report = handle.join().map_err(|_panic| FloodError::WorkerPanicked {
                    phase: "coloring",
                    worker,
                })??;
                total.absorb(report);
            }
            Ok(total)
        })
    }
}

fn color_worker(
    worker_id: usize,
    seeds: SeedSource,
    grid: &SharedGrid,
    queue: &ClaimQueue,
    progress: &ProgressBar,
) -> Result<ColoringReport> {
    let mut rng = seeds.worker_rng(COLORING_SEED_SALT, worker_id);
    let mut report = ColoringReport::default();

    loop {
        match queue.claim_next(grid, &mut rng)? {
            ClaimAttempt::Exhausted => break,
            ClaimAttempt::Degenerate => report.degenerate += 1,
            ClaimAttempt::Claimed(claim) => {
                progress.inc(1);
                let outcome = flood_region(grid, &claim);
                report.record(claim, outcome);
            }
        }
    }

    debug!(
        "Coloring worker {worker_id} started {} fills ({} conceded, {} retried)",
        report.fills_started(),
        report.conceded,
        report.degenerate
    );
    Ok(report)
}
