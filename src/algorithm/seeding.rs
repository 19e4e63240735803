//! Independent random generators for pool workers

use rand::{SeedableRng, rngs::StdRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Where worker seeds come from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Wall-clock nanoseconds sampled once per worker
    #[default]
    Clock,
    /// Fixed base seed for reproducible worker sequences
    Fixed(u64),
}

impl SeedSource {
    /// Build from an optional command-line seed
    pub const fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Fixed(seed),
            None => Self::Clock,
        }
    }

    /// Seed value for one worker of one phase
    ///
    /// The phase salt and worker identifier are folded into the base so
    /// workers never share a sequence even when started within the same
    /// clock tick. `StdRng::seed_from_u64` expands the result.
    pub fn worker_seed(self, salt: u64, worker_id: usize) -> u64 {
        let base = match self {
            Self::Clock => clock_nanos(),
            Self::Fixed(seed) => seed,
        };
        (base ^ salt).wrapping_add(worker_id as u64)
    }

    /// Owned generator for one worker of one phase
    pub fn worker_rng(self, salt: u64, worker_id: usize) -> StdRng {
        StdRng::seed_from_u64(self.worker_seed(salt, worker_id))
    }
}

// A clock before the epoch only loses entropy, the worker id still separates streams
fn clock_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
