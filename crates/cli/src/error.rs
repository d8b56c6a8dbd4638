//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: generation error (bad dimensions, zero seeds)
//! - 11: I/O error (image or recipe file)
//! - 12: input error (unknown palette or distance, bad recipe JSON)
//! - 13: serialization error

use std::fmt;
use voronoi_raster_core::RasterError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A generation error from the core.
    Generate(RasterError),
    /// Reading or writing a file failed.
    Io(String),
    /// A user input error.
    Input(String),
    /// JSON output failed.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generate(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Generate(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<RasterError> for CliError {
    fn from(e: RasterError) -> Self {
        match e {
            RasterError::Io(msg) => CliError::Io(msg),
            e @ (RasterError::UnknownPalette(_)
            | RasterError::UnknownDistance(_)
            | RasterError::InvalidColor(_)
            | RasterError::InvalidPalette(_)) => CliError::Input(e.to_string()),
            other => CliError::Generate(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
