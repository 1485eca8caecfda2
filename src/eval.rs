//! Parsing of evaluation result files.
//!
//! An evaluation file is plain text with two lines per entry: a benchmark
//! name, then its score as a decimal literal. Leading/trailing whitespace on
//! each line is ignored. Names are mapped to display labels as they are read.

use crate::benchmark::display_name;
use crate::error::{Result, TableError};
use std::fs;
use std::path::Path;

/// Scores from one evaluation file, keyed by benchmark display label.
///
/// Insertion order follows file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    entries: Vec<(String, f64)>,
}

impl Evaluation {
    /// Number of benchmark entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the evaluation has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display labels in file order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Scores in file order.
    pub fn scores(&self) -> impl Iterator<Item = f64> {
        self.entries.iter().map(|(_, score)| *score)
    }
}

/// Which slot the next line fills. A name left awaiting its score at end of
/// file is a fatal [`TableError::MissingScore`].
enum ParserState {
    AwaitingName,
    AwaitingScore(String),
}

/// Parse one evaluation file into an ordered label → score mapping.
///
/// An empty file yields an empty mapping. Blank lines are not skipped: a
/// blank line in a name slot is an unknown benchmark name.
pub fn parse_evaluation(path: &Path) -> Result<Evaluation> {
    let content = fs::read_to_string(path).map_err(|e| TableError::io(path, e))?;

    let mut entries = Vec::new();
    let mut state = ParserState::AwaitingName;

    for line in content.lines() {
        let line = line.trim();
        state = match state {
            ParserState::AwaitingName => {
                ParserState::AwaitingScore(display_name(line)?.to_string())
            }
            ParserState::AwaitingScore(label) => {
                let score: f64 = line.parse().map_err(|e| TableError::InvalidScore {
                    path: path.to_path_buf(),
                    name: label.clone(),
                    value: line.to_string(),
                    source: e,
                })?;
                entries.push((label, score));
                ParserState::AwaitingName
            }
        };
    }

    if let ParserState::AwaitingScore(name) = state {
        return Err(TableError::MissingScore {
            path: path.to_path_buf(),
            name,
        });
    }

    Ok(Evaluation { entries })
}
