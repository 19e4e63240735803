//! Parameter stream parsing for grid and load runs
//!
//! Parameters arrive as whitespace-separated tokens:
//!
//! ```text
//! grid:  size lines threads fills choice [row col]...
//! load:  size threads contour_path fills choice [row col]...
//! ```
//!
//! `choice` is `n` for an explicit list of exactly `fills` start points;
//! anything else selects random start points.

use clap::ValueEnum;
use std::path::PathBuf;
use std::str::FromStr;

use crate::algorithm::claims::StartPoints;
use crate::io::configuration::{EXPLICIT_POINTS_CHOICE, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter, malformed_input};

/// How the initial grid is produced
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Blank grid carved by random boundary lines
    Grid,
    /// Grid loaded from an existing contour image
    Load,
}

/// Mode-specific grid parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridSetup {
    /// Blank `size x size` grid with `lines` boundary lines
    Carved {
        /// Side length of the square grid
        size: usize,
        /// Number of boundary lines to draw
        lines: usize,
    },
    /// `size x size` grid read from a contour file
    Contour {
        /// Side length of the square grid
        size: usize,
        /// Path of the contour image
        path: PathBuf,
    },
}

impl GridSetup {
    /// Side length of the square grid
    pub const fn size(&self) -> usize {
        match self {
            Self::Carved { size, .. } | Self::Contour { size, .. } => *size,
        }
    }
}

/// Fill count and start point source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillPlan {
    /// Successful fills requested
    pub fills: usize,
    /// Where fill origins come from
    pub start_points: StartPoints,
}

/// Everything a run needs besides output options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunParameters {
    /// Grid construction parameters
    pub grid: GridSetup,
    /// Worker threads per phase
    pub threads: usize,
    /// Fill parameters
    pub fill: FillPlan,
}

impl RunParameters {
    /// Parse a full parameter stream for `mode`
    ///
    /// # Errors
    ///
    /// Returns an error if a token is missing or unparsable, a value is out
    /// of range, or an explicit start point lies outside the grid
    pub fn parse(mode: Mode, input: &str) -> Result<Self> {
        let mut tokens = TokenStream::new(input);

        let (grid, threads): (GridSetup, usize) = match mode {
            Mode::Grid => {
                let size = tokens.next_parsed("grid size")?;
                let lines = tokens.next_parsed("line count")?;
                let threads = tokens.next_parsed("thread count")?;
                (GridSetup::Carved { size, lines }, threads)
            }
            Mode::Load => {
                let size = tokens.next_parsed("grid size")?;
                let threads = tokens.next_parsed("thread count")?;
                let path = PathBuf::from(tokens.next_token("contour path")?);
                (GridSetup::Contour { size, path }, threads)
            }
        };

        validate_size(grid.size())?;
        if threads == 0 {
            return Err(invalid_parameter(
                "threads",
                &threads,
                &"at least one worker is required",
            ));
        }

        let fill = parse_fill_plan(&mut tokens, grid.size())?;

        Ok(Self {
            grid,
            threads,
            fill,
        })
    }
}

fn validate_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

fn parse_fill_plan(tokens: &mut TokenStream<'_>, size: usize) -> Result<FillPlan> {
    let fills: usize = tokens.next_parsed("fill count")?;
    let choice = tokens.next_token("start point choice")?;

    let explicit = choice
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&EXPLICIT_POINTS_CHOICE));

    let start_points = if explicit {
        let mut points = Vec::new();
        for _ in 0..fills {
            let row = tokens.next_parsed("start point row")?;
            let col = tokens.next_parsed("start point column")?;
            points.push([row, col]);
        }
        StartPoints::explicit(points, size, size)?
    } else {
        StartPoints::Random
    };

    Ok(FillPlan {
        fills,
        start_points,
    })
}

/// Whitespace token cursor over a parameter stream
pub struct TokenStream<'a> {
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> TokenStream<'a> {
    /// Start reading tokens from `input`
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
        }
    }

    /// Next raw token
    ///
    /// # Errors
    ///
    /// Returns an error at end of input
    pub fn next_token(&mut self, expected: &'static str) -> Result<&'a str> {
        self.tokens
            .next()
            .ok_or_else(|| malformed_input(expected, None))
    }

    /// Next token parsed as `T`
    ///
    /// # Errors
    ///
    /// Returns an error at end of input or if the token doesn't parse
    pub fn next_parsed<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.next_token(expected)?;
        token
            .parse()
            .map_err(|_parse| malformed_input(expected, Some(token)))
    }
}
