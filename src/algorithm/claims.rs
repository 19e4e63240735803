//! Start point queue shared by the coloring workers
//!
//! The remaining fill count and the start point source live behind one mutex
//! and can only be reached through [`ClaimQueue::claim_next`], which checks
//! the count, draws a point, inspects its pixel and decrements the count as a
//! single step. Everything after a successful claim runs without locks.

use rand::Rng;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::io::error::{FloodError, Result, invalid_parameter};
use crate::spatial::{Rgb, SharedGrid};

/// Where fill origins come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartPoints {
    /// A finite list consumed front to back, each point at most once
    Explicit(VecDeque<[usize; 2]>),
    /// Uniform random coordinates drawn by the claiming worker
    Random,
}

impl StartPoints {
    /// Explicit points, checked against the grid bounds
    ///
    /// # Errors
    ///
    /// Returns an error if any point lies outside a `rows x cols` grid
    pub fn explicit(points: Vec<[usize; 2]>, rows: usize, cols: usize) -> Result<Self> {
        if let Some([row, col]) = points.iter().find(|[r, c]| *r >= rows || *c >= cols) {
            return Err(invalid_parameter(
                "start point",
                &format!("({row}, {col})"),
                &format!("outside the {rows}x{cols} grid"),
            ));
        }
        Ok(Self::Explicit(points.into()))
    }
}

/// A successfully claimed fill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Claim {
    /// Seed cell of the fill
    pub origin: [usize; 2],
    /// Color this fill paints with
    pub color: Rgb,
    /// Pixel value at the origin before the fill started
    pub original: Rgb,
}

/// Result of one attempt to claim a fill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimAttempt {
    /// Counter decremented; the worker owns this fill
    Claimed(Claim),
    /// Point landed on black or the drawn color matched it; retry
    Degenerate,
    /// No fills remain, or the explicit list ran dry
    Exhausted,
}

#[derive(Debug)]
struct ClaimState {
    remaining: usize,
    source: StartPoints,
}

/// Mutex-guarded pair of remaining fill count and start point source
#[derive(Debug)]
pub struct ClaimQueue {
    state: Mutex<ClaimState>,
    requested: usize,
}

impl ClaimQueue {
    /// Create a queue owing `fills` successful fills
    pub const fn new(fills: usize, source: StartPoints) -> Self {
        Self {
            state: Mutex::new(ClaimState {
                remaining: fills,
                source,
            }),
            requested: fills,
        }
    }

    /// Number of fills originally requested
    pub const fn requested(&self) -> usize {
        self.requested
    }

    /// Fills still owed
    ///
    /// # Errors
    ///
    /// Returns an error if the queue mutex was poisoned
    pub fn remaining(&self) -> Result<usize> {
        let state = self.state.lock().map_err(|_poison| FloodError::LockPoisoned)?;
        Ok(state.remaining)
    }

    /// Try to claim the next fill
    ///
    /// Under the lock: stop if nothing is owed, take the next origin, read its
    /// pixel and draw a region color from `rng`. A black origin, or a color
    /// equal to the origin's pixel, is degenerate and leaves the count
    /// untouched. Explicit points are consumed either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the queue mutex was poisoned
    pub fn claim_next<R: Rng + ?Sized>(
        &self,
        grid: &SharedGrid,
        rng: &mut R,
    ) -> Result<ClaimAttempt> {
        let mut state = self.state.lock().map_err(|_poison| FloodError::LockPoisoned)?;

        if state.remaining == 0 {
            return Ok(ClaimAttempt::Exhausted);
        }

        let origin = match &mut state.source {
            StartPoints::Explicit(points) => match points.pop_front() {
                Some(point) => point,
                None => return Ok(ClaimAttempt::Exhausted),
            },
            StartPoints::Random => [
                rng.random_range(0..grid.rows()),
                rng.random_range(0..grid.cols()),
            ],
        };

        let color = Rgb::random_region(rng);
        let Some(original) = grid.get(origin) else {
            return Ok(ClaimAttempt::Degenerate);
        };
        if original.is_black() || original == color {
            return Ok(ClaimAttempt::Degenerate);
        }

        state.remaining -= 1;
        drop(state);

        Ok(ClaimAttempt::Claimed(Claim {
            origin,
            color,
            original,
        }))
    }
}
