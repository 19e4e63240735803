//! Random boundary lines that carve the grid into separate cells
//!
//! Each line enters from a random wall and wanders towards the opposite side,
//! stepping straight or diagonally, painting black until it leaves the grid.
//! Workers paint without locks: every write is the same sentinel value, so
//! overlapping lines commute.

use indicatif::ProgressBar;
use log::debug;
use rand::Rng;

use crate::algorithm::seeding::SeedSource;
use crate::io::configuration::BOUNDARY_SEED_SALT;
use crate::io::error::{FloodError, Result, invalid_parameter};
use crate::spatial::{Rgb, SharedGrid};

/// Grid wall a line enters from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    /// Enters on the last row and walks up
    Bottom,
    /// Enters on the last column and walks left
    Right,
    /// Enters on the first row and walks down
    Top,
    /// Enters on the first column and walks right
    Left,
}

/// All walls, in draw order
pub const WALLS: [Wall; 4] = [Wall::Bottom, Wall::Right, Wall::Top, Wall::Left];

impl Wall {
    /// Unit step away from the wall, taken on every move
    pub const fn primary(self) -> [i64; 2] {
        match self {
            Self::Bottom => [-1, 0],
            Self::Right => [0, -1],
            Self::Top => [1, 0],
            Self::Left => [0, 1],
        }
    }

    /// Sideways component added when veering right
    pub const fn lateral(self) -> [i64; 2] {
        match self {
            Self::Bottom => [0, 1],
            Self::Right => [1, 0],
            Self::Top => [0, -1],
            Self::Left => [-1, 0],
        }
    }

    /// Number of cells along the wall
    pub const fn span(self, rows: usize, cols: usize) -> usize {
        match self {
            Self::Bottom | Self::Top => cols,
            Self::Right | Self::Left => rows,
        }
    }

    /// Entry cell for an offset along the wall
    ///
    /// An empty grid has no last row or column; its walls sit on index 0.
    pub const fn entry(self, offset: usize, rows: usize, cols: usize) -> [usize; 2] {
        match self {
            Self::Bottom => [rows.saturating_sub(1), offset],
            Self::Right => [offset, cols.saturating_sub(1)],
            Self::Top => [0, offset],
            Self::Left => [offset, 0],
        }
    }
}

/// Heading choice for one step, relative to the wall's primary direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Diagonal step to the right of the primary direction
    VeerRight,
    /// Primary direction only
    Straight,
    /// Diagonal step to the left of the primary direction
    VeerLeft,
}

/// All turns, in draw order
pub const TURNS: [Turn; 3] = [Turn::VeerRight, Turn::Straight, Turn::VeerLeft];

impl Turn {
    /// Row and column delta of this turn for a line entering from `wall`
    pub const fn delta(self, wall: Wall) -> [i64; 2] {
        let [dr, dc] = wall.primary();
        let [lr, lc] = wall.lateral();
        match self {
            Self::VeerRight => [dr + lr, dc + lc],
            Self::Straight => [dr, dc],
            Self::VeerLeft => [dr - lr, dc - lc],
        }
    }
}

/// Summary of one finished line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSummary {
    /// Wall the line entered from
    pub wall: Wall,
    /// Number of cells painted (one per step)
    pub steps: usize,
    /// First out-of-bounds position reached
    pub exit: [i64; 2],
}

/// Walk one random line, calling `visit` for every in-bounds cell in order
///
/// The walk advances one cell along the wall's primary direction on every
/// step, so it always leaves the grid after at most `rows` or `cols` steps.
/// A grid with no rows or no columns yields an empty line at `[0, 0]`.
pub fn walk_line<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
    mut visit: impl FnMut([usize; 2]),
) -> LineSummary {
    let wall = WALLS
        .get(rng.random_range(0..WALLS.len()))
        .copied()
        .unwrap_or(Wall::Bottom);
    let span = wall.span(rows, cols);
    if rows == 0 || cols == 0 {
        return LineSummary {
            wall,
            steps: 0,
            exit: [0, 0],
        };
    }
    let offset = rng.random_range(0..span);
    let [start_row, start_col] = wall.entry(offset, rows, cols);

    let mut cursor = [start_row as i64, start_col as i64];
    let mut steps = 0;

    while let Some(cell) = in_bounds(cursor, rows, cols) {
        visit(cell);
        steps += 1;

        let turn = TURNS
            .get(rng.random_range(0..TURNS.len()))
            .copied()
            .unwrap_or(Turn::Straight);
        let [dr, dc] = turn.delta(wall);
        cursor = [cursor[0] + dr, cursor[1] + dc];
    }

    LineSummary {
        wall,
        steps,
        exit: cursor,
    }
}

const fn in_bounds(position: [i64; 2], rows: usize, cols: usize) -> Option<[usize; 2]> {
    let [row, col] = position;
    if row < 0 || col < 0 || row >= rows as i64 || col >= cols as i64 {
        None
    } else {
        Some([row as usize, col as usize])
    }
}

/// Split `lines` across `workers`, giving the remainder to the first workers
pub fn partition_workload(lines: usize, workers: usize) -> Vec<usize> {
    if workers == 0 {
        return Vec::new();
    }
    let share = lines / workers;
    let remainder = lines % workers;
    (0..workers)
        .map(|worker| share + usize::from(worker < remainder))
        .collect()
}

/// Totals reported after carving
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryReport {
    /// Lines drawn across all workers
    pub lines_drawn: usize,
    /// Black writes performed, counting overlaps
    pub cells_painted: usize,
}

impl BoundaryReport {
    const fn absorb(&mut self, other: Self) {
        self.lines_drawn += other.lines_drawn;
        self.cells_painted += other.cells_painted;
    }
}

/// Worker pool that carves boundary lines into a shared grid
#[derive(Clone, Copy, Debug)]
pub struct BoundaryGenerator {
    lines: usize,
    workers: usize,
    seeds: SeedSource,
}

impl BoundaryGenerator {
    /// Configure a generator
    ///
    /// # Errors
    ///
    /// Returns an error if `workers` is zero
    pub fn new(lines: usize, workers: usize, seeds: SeedSource) -> Result<Self> {
        if workers == 0 {
            return Err(invalid_parameter(
                "threads",
                &workers,
                &"at least one worker is required",
            ));
        }
        Ok(Self {
            lines,
            workers,
            seeds,
        })
    }

    /// Number of lines this generator draws
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Draw every line into `grid`, one scoped thread per worker
    ///
    /// # Errors
    ///
    /// Returns an error if a worker thread panics
    pub fn carve(&self, grid: &SharedGrid, progress: &ProgressBar) -> Result<BoundaryReport> {
        let workloads = partition_workload(self.lines, self.workers);

        std::thread::scope(|scope| {
            let handles: Vec<_> = workloads
                .iter()
                .enumerate()
                .map(|(worker_id, &workload)| {
                    let seeds = self.seeds;
                    scope.spawn(move || {
                        let mut rng = seeds.worker_rng(BOUNDARY_SEED_SALT, worker_id);
                        let mut report = BoundaryReport::default();
                        for _ in 0..workload {
                            let line = walk_line(grid.rows(), grid.cols(), &mut rng, |cell| {
                                grid.set(cell, Rgb::BLACK);
                            });
                            report.absorb(BoundaryReport {
                                lines_drawn: 1,
                                cells_painted: line.steps,
                            });
                            progress.inc(1);
                        }
                        debug!(
                            "Boundary worker {worker_id} drew {} lines",
                            report.lines_drawn
                        );
                        report
                    })
                })
                .collect();

            let mut total = BoundaryReport::default();
            for (worker, handle) in handles.into_iter().enumerate() {
                let report = handle.join().map_err(|_panic| FloodError::WorkerPanicked {
                    phase: "boundary generation",
                    worker,
                })?;
                total.absorb(report);
            }
            Ok(total)
        })
    }
}
