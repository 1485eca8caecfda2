//! Error types for the table builder.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom error.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors that can occur while building the comparison table.
#[derive(Error, Debug)]
pub enum TableError {
    /// Error reading or writing files.
    #[error("I/O error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A benchmark name not present in the fixed benchmark table.
    #[error("Unknown benchmark name '{0}'")]
    UnknownBenchmark(String),

    /// The filename's last dot-separated segment is not `evaluation`.
    #[error("'{0}' is not an evaluation file (expected a name ending in '.evaluation')")]
    NotAnEvaluationFile(PathBuf),

    /// A score line that does not parse as a float.
    #[error("Invalid score '{value}' for benchmark '{name}' in '{path}': {source}")]
    InvalidScore {
        path: PathBuf,
        name: String,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// The file ended with a benchmark name that has no paired score.
    #[error("'{path}' ends with benchmark '{name}' but no score (odd number of lines)")]
    MissingScore { path: PathBuf, name: String },

    /// A file reports a different number of benchmarks than the first file.
    #[error("'{path}' reports {found} benchmarks, expected {expected}")]
    BenchmarkCountMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// A file reports benchmarks in a different order than the first file.
    /// Only raised in strict mode.
    #[error("'{path}' reports benchmark '{found}' where '{expected}' was expected")]
    BenchmarkOrderMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
}

impl TableError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
