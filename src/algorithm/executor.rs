//! Run orchestration: build the grid, carve boundaries, color regions

use log::{info, warn};
use std::time::{Duration, Instant};

use crate::algorithm::boundary::{BoundaryGenerator, BoundaryReport};
use crate::algorithm::claims::ClaimQueue;
use crate::algorithm::flood::{Colorer, ColoringReport};
use crate::algorithm::seeding::SeedSource;
use crate::io::error::Result;
use crate::io::image::{is_png, load_contour_png};
use crate::io::params::{FillPlan, GridSetup, RunParameters};
use crate::io::ppm::load_contour;
use crate::io::progress::ProgressManager;
use crate::spatial::SharedGrid;

/// Wall-clock time spent in each phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    /// Grid allocation or contour loading
    pub construction: Duration,
    /// Boundary carving, when a carved grid was requested
    pub boundary: Option<Duration>,
    /// Region coloring
    pub coloring: Duration,
}

/// Outcome of a complete run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Carving totals, when boundaries were drawn
    pub boundary: Option<BoundaryReport>,
    /// Coloring totals
    pub coloring: ColoringReport,
    /// Phase durations
    pub timings: PhaseTimings,
}

/// Phase sequencer owning the shared grid for the duration of a run
///
/// The grid is lent by reference to each worker pool in turn and handed
/// back to the caller once every worker has joined.
#[derive(Debug)]
pub struct FloodPipeline {
    grid: SharedGrid,
    lines: Option<usize>,
    threads: usize,
    seeds: SeedSource,
    timings: PhaseTimings,
}

impl FloodPipeline {
    /// Pipeline over a blank `size x size` grid that will carve `lines` boundaries
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid
    pub fn carved(size: usize, lines: usize, threads: usize, seeds: SeedSource) -> Result<Self> {
        let start = Instant::now();
        let grid = SharedGrid::blank(size, size)?;
        let construction = start.elapsed();
        info!(
            "Time taken to construct {size}x{size} blank matrix: {:.6} seconds",
            construction.as_secs_f64()
        );

        Ok(Self {
            grid,
            lines: Some(lines),
            threads,
            seeds,
            timings: PhaseTimings {
                construction,
                ..PhaseTimings::default()
            },
        })
    }

    /// Pipeline over an existing grid; no boundaries are carved
    pub const fn with_grid(grid: SharedGrid, threads: usize, seeds: SeedSource) -> Self {
        Self {
            grid,
            lines: None,
            threads,
            seeds,
            timings: PhaseTimings {
                construction: Duration::ZERO,
                boundary: None,
                coloring: Duration::ZERO,
            },
        }
    }

    /// Pipeline for parsed run parameters, loading the contour if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be built or the contour cannot be loaded
    pub fn from_parameters(params: &RunParameters, seeds: SeedSource) -> Result<Self> {
        match &params.grid {
            GridSetup::Carved { size, lines } => {
                Self::carved(*size, *lines, params.threads, seeds)
            }
            GridSetup::Contour { size, path } => {
                let start = Instant::now();
                let grid = if is_png(path) {
                    load_contour_png(path, *size, *size)?
                } else {
                    load_contour(path, *size, *size)?
                };
                let mut pipeline = Self::with_grid(grid, params.threads, seeds);
                pipeline.timings.construction = start.elapsed();
                info!(
                    "Loaded {size}x{size} contour from '{}' in {:.6} seconds",
                    path.display(),
                    pipeline.timings.construction.as_secs_f64()
                );
                Ok(pipeline)
            }
        }
    }

    /// The shared grid
    pub const fn grid(&self) -> &SharedGrid {
        &self.grid
    }

    /// Carve boundary lines if this pipeline was built for a carved grid
    ///
    /// # Errors
    ///
    /// Returns an error if the worker count is invalid or a worker panics
    pub fn carve(&mut self, progress: &ProgressManager) -> Result<Option<BoundaryReport>> {
        let Some(lines) = self.lines else {
            return Ok(None);
        };

        let generator = BoundaryGenerator::new(lines, self.threads, self.seeds)?;
        let bar = progress.start_phase("lines", generator.lines());
        let start = Instant::now();
        let report = generator.carve(&self.grid, &bar)?;
        let elapsed = start.elapsed();
        ProgressManager::finish_phase(&bar);

        self.timings.boundary = Some(elapsed);
        info!(
            "Time taken by {} threads to produce grid: {:.6} seconds",
            self.threads,
            elapsed.as_secs_f64()
        );
        Ok(Some(report))
    }

    /// Flood regions until the requested fills have started
    ///
    /// # Errors
    ///
    /// Returns an error if the worker count is invalid, a worker panics, or
    /// the claim lock is poisoned
    pub fn color(&mut self, plan: FillPlan, progress: &ProgressManager) -> Result<ColoringReport> {
        let colorer = Colorer::new(self.threads, self.seeds)?;
        let queue = ClaimQueue::new(plan.fills, plan.start_points);
        let bar = progress.start_phase("fills", queue.requested());

        let start = Instant::now();
        let report = colorer.run(&self.grid, &queue, &bar)?;
        let elapsed = start.elapsed();
        ProgressManager::finish_phase(&bar);

        self.timings.coloring = elapsed;
        info!(
            "Time taken by {} threads to fill image: {:.6} seconds",
            self.threads,
            elapsed.as_secs_f64()
        );
        info!(
            "Fills started: {}, exhausted: {}, conceded: {}, retried: {}, pixels painted: {}",
            report.fills_started(),
            report.exhausted,
            report.conceded,
            report.degenerate,
            report.painted
        );

        let shortfall = queue.requested().saturating_sub(report.fills_started());
        if shortfall > 0 {
            warn!("Start points ran out with {shortfall} fills still requested");
        }

        Ok(report)
    }

    /// Run every phase and hand back the finished grid
    ///
    /// # Errors
    ///
    /// Returns an error if carving or coloring fails
    pub fn run(
        mut self,
        plan: FillPlan,
        progress: &ProgressManager,
    ) -> Result<(SharedGrid, RunSummary)> {
        let boundary = self.carve(progress)?;
        let coloring = self.color(plan, progress)?;

        let summary = RunSummary {
            boundary,
            coloring,
            timings: self.timings,
        };
        Ok((self.grid, summary))
    }
}
