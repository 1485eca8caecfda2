//! Simtable - renders word-similarity evaluation results as a LaTeX table.
//!
//! Takes one evaluation file per vector variant (raw, standardized, or
//! retrofitted embeddings, optionally L1/L2-normalized) and assembles the
//! scores into a single comparison table: one row per variant in canonical
//! order, one column per benchmark in the order the first file reports them.
//!
//! # Quick Start
//!
//! ```no_run
//! use simtable::{build_table, write_table};
//! use std::path::{Path, PathBuf};
//!
//! fn main() -> simtable::Result<()> {
//!     let inputs = vec![
//!         PathBuf::from("glove.840B.300d.raw.evaluation"),
//!         PathBuf::from("glove.840B.300d.retrofit.evaluation"),
//!     ];
//!
//!     let table = build_table(&inputs, false)?;
//!     write_table(&table.to_latex(), Path::new("results.tex"))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **benchmark**: the fixed benchmark-key to display-label table
//! - **variant**: vector-variant labels and row ordering, from filenames
//! - **eval**: the two-line-per-entry evaluation file parser
//! - **table**: table assembly, score formatting, LaTeX rendering

pub mod benchmark;
pub mod error;
pub mod eval;
pub mod table;
pub mod variant;

// Re-export commonly used types
pub use benchmark::display_name;
pub use error::{Result, TableError};
pub use eval::{Evaluation, parse_evaluation};
pub use table::{Column, ResultTable, build_table, format_score, write_table};
pub use variant::{Category, Normalization, Variant};
