//! Vector-variant labels derived from evaluation filenames.
//!
//! An evaluation filename is a dot-separated list of segments ending in
//! `evaluation`, e.g. `glove.840B.300d.retrofit.l2.evaluation`. The segments
//! encode which variant of the vectors was evaluated: raw, standardized, or
//! retrofitted, optionally L1- or L2-normalized.

use crate::error::{Result, TableError};
use std::fmt;
use std::path::Path;

/// How the vectors were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Raw,
    Standardized,
    Retrofitted,
}

impl Category {
    /// Rank used for row ordering: raw rows first, retrofitted rows last.
    fn rank(self) -> u8 {
        match self {
            Category::Raw => 0,
            Category::Standardized => 1,
            Category::Retrofitted => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Raw => write!(f, "raw"),
            Category::Standardized => write!(f, "standardized"),
            Category::Retrofitted => write!(f, "retrofitted"),
        }
    }
}

/// Which normalization, if any, was applied to the vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    None,
    L2,
    L1,
}

impl Normalization {
    /// Rank used for row ordering: unnormalized first, then L2, then L1.
    fn rank(self) -> u8 {
        match self {
            Normalization::None => 0,
            Normalization::L2 => 1,
            Normalization::L1 => 2,
        }
    }
}

/// The vector variant an evaluation file describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub category: Category,
    pub normalization: Normalization,
}

impl Variant {
    /// Derive the variant from an evaluation filename.
    ///
    /// Only the last path component is inspected. Its final dot-separated
    /// segment must be `evaluation`, otherwise this is a fatal
    /// [`TableError::NotAnEvaluationFile`].
    ///
    /// Category: a `retrofit` segment wins; otherwise a `raw` segment or a
    /// segment count of exactly five means raw; anything else is
    /// standardized. Normalization: `l1`/`L1-normalized` is checked before
    /// `l2`/`L2-normalized`.
    pub fn from_filename(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| TableError::NotAnEvaluationFile(path.to_path_buf()))?;

        let sections: Vec<&str> = name.split('.').collect();
        if sections.last() != Some(&"evaluation") {
            return Err(TableError::NotAnEvaluationFile(path.to_path_buf()));
        }

        let category = if sections.contains(&"retrofit") {
            Category::Retrofitted
        } else if sections.contains(&"raw") || sections.len() == 5 {
            Category::Raw
        } else {
            Category::Standardized
        };

        let normalization = if sections.contains(&"l1") || sections.contains(&"L1-normalized") {
            Normalization::L1
        } else if sections.contains(&"l2") || sections.contains(&"L2-normalized") {
            Normalization::L2
        } else {
            Normalization::None
        };

        Ok(Self {
            category,
            normalization,
        })
    }

    /// Two-element sort key: `[category rank, normalization rank]`.
    ///
    /// Ascending lexicographic order over this key gives the canonical row
    /// order: (raw, standardized, retrofitted) × (unnormalized, L2, L1).
    pub fn sort_key(&self) -> [u8; 2] {
        [self.category.rank(), self.normalization.rank()]
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        match self.normalization {
            Normalization::None => Ok(()),
            Normalization::L1 => write!(f, " (L1)"),
            Normalization::L2 => write!(f, " (L2)"),
        }
    }
}
