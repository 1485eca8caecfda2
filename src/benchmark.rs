//! The fixed set of word-similarity benchmarks and their display labels.

use crate::error::{Result, TableError};

/// Benchmark keys as they appear in evaluation files, paired with the label
/// used in the rendered table. This set is closed; unknown keys are an error.
const DISPLAYED_NAMES: [(&str, &str); 6] = [
    ("rw", "RW"),
    ("men-3000", "MEN-3000"),
    ("wordsim-353", "WS-353"),
    ("rg-65", "RG-65"),
    ("mc-30", "MC-30"),
    ("scws", "SCWS"),
];

/// Look up the display label for a raw benchmark name.
///
/// Exact match only; an unrecognized name is a fatal
/// [`TableError::UnknownBenchmark`].
pub fn display_name(name: &str) -> Result<&'static str> {
    DISPLAYED_NAMES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, label)| *label)
        .ok_or_else(|| TableError::UnknownBenchmark(name.to_string()))
}
