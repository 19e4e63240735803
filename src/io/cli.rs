//! Command-line interface and run driver

use clap::Parser;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::algorithm::executor::{FloodPipeline, RunSummary};
use crate::algorithm::seeding::SeedSource;
use crate::io::configuration::DEFAULT_OUTPUT;
use crate::io::error::{Result, file_system};
use crate::io::image::export_grid_as_png;
use crate::io::logging::{init_logging, level_filter};
use crate::io::params::{Mode, RunParameters};
use crate::io::ppm::save_ppm;
use crate::io::progress::ProgressManager;

#[derive(Parser, Debug)]
#[command(name = "floodgrid")]
#[command(
    author,
    version,
    about = "Carve a grid with random lines and flood its regions concurrently"
)]
/// Command-line arguments for the flood fill tool
pub struct Cli {
    /// Grid source: `grid` carves a blank grid, `load` reads a contour image
    #[arg(value_enum, value_name = "MODE")]
    pub mode: Mode,

    /// Parameter stream to read instead of standard input
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Pixel map output file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also export the finished grid as PNG
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Fixed seed base for worker generators (clock-seeded when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress bars and informational logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-worker details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed source for every worker pool of the run
    pub const fn seed_source(&self) -> SeedSource {
        SeedSource::from_option(self.seed)
    }
}

/// Drives one run from parameters to written artifacts
pub struct Runner {
    cli: Cli,
    progress: ProgressManager,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        let progress = ProgressManager::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Install the terminal logger for this run's verbosity
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger is already installed
    pub fn init_logging(&self) -> Result<()> {
        init_logging(level_filter(self.cli.quiet, self.cli.verbose))
    }

    /// Run the whole pipeline and write the outputs
    ///
    /// The output file is created before any work starts so an unwritable
    /// destination fails fast.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be created, the parameters are
    /// invalid, any phase fails, or an artifact cannot be written
    pub fn process(&self) -> Result<RunSummary> {
        let output = File::create(&self.cli.output)
            .map_err(|e| file_system(&self.cli.output, "create output", e))?;

        let input = self.read_parameters()?;
        let params = RunParameters::parse(self.cli.mode, &input)?;
        debug!("Run parameters: {params:?}");

        let pipeline = FloodPipeline::from_parameters(&params, self.cli.seed_source())?;
        let (grid, summary) = pipeline.run(params.fill, &self.progress)?;

        info!("Writing {}", self.cli.output.display());
        save_ppm(&grid, output, &self.cli.output)?;

        if let Some(png) = &self.cli.png {
            info!("Writing {}", png.display());
            export_grid_as_png(&grid, png)?;
        }

        Ok(summary)
    }

    fn read_parameters(&self) -> Result<String> {
        let mut input = String::new();
        match &self.cli.input {
            Some(path) => {
                File::open(path)
                    .and_then(|mut file| file.read_to_string(&mut input))
                    .map_err(|e| file_system(path, "read parameters", e))?;
            }
            None => {
                std::io::stdin()
                    .read_to_string(&mut input)
                    .map_err(|e| file_system(Path::new("<stdin>"), "read parameters", e))?;
            }
        }
        Ok(input)
    }
}
