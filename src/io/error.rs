//! Error types for grid construction, parameter parsing and artifact export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all flood fill operations
#[derive(Debug)]
pub enum FloodError {
    /// Run parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Parameter stream ended early or held an unparsable token
    MalformedInput {
        /// What the parser was looking for
        expected: &'static str,
        /// Token found instead (`None` at end of input)
        found: Option<String>,
    },

    /// Contour pixel stream could not be turned into a grid
    ContourFormat {
        /// Description of what's wrong with the contour data
        reason: String,
    },

    /// Failed to load a PNG contour from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the finished grid as PNG
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A worker thread of a pool panicked before joining
    WorkerPanicked {
        /// Phase the worker belonged to
        phase: &'static str,
        /// Index of the worker within its pool
        worker: usize,
    },

    /// The claim mutex was poisoned by a panicking worker
    LockPoisoned,

    /// A global logger was already installed
    Logger {
        /// Underlying logger error
        source: log::SetLoggerError,
    },
}

impl fmt::Display for FloodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MalformedInput { expected, found } => match found {
                Some(token) => write!(f, "Malformed input: expected {expected}, found '{token}'"),
                None => write!(f, "Malformed input: expected {expected}, found end of input"),
            },
            Self::ContourFormat { reason } => {
                write!(f, "Invalid contour data: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::WorkerPanicked { phase, worker } => {
                write!(f, "Worker {worker} panicked during {phase}")
            }
            Self::LockPoisoned => write!(f, "Start point queue lock was poisoned"),
            Self::Logger { source } => write!(f, "Failed to initialise logging: {source}"),
        }
    }
}

impl std::error::Error for FloodError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logger { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for flood fill results
pub type Result<T> = std::result::Result<T, FloodError>;

impl From<log::SetLoggerError> for FloodError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logger { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FloodError {
    FloodError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed input error for the token that failed to parse
pub fn malformed_input(expected: &'static str, found: Option<&str>) -> FloodError {
    FloodError::MalformedInput {
        expected,
        found: found.map(str::to_string),
    }
}

/// Create a file system error bound to the path and operation that failed
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> FloodError {
    FloodError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
