//! Assembling and rendering the comparison table.
//!
//! Rows are vector variants (one per input file, canonical order), columns
//! are benchmarks (fixed by the first file's parsed order). The table is
//! rendered once per invocation as a booktabs `tabular` block.

use crate::error::{Result, TableError};
use crate::eval::parse_evaluation;
use crate::variant::Variant;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Format a score to three decimals with leading zeros stripped.
///
/// `0.842` renders as `.842` and `0.05` as `.050`. Only leading `'0'`
/// characters are removed, so values at or above 1.0 keep their integer
/// digits and negative values keep their sign.
pub fn format_score(score: f64) -> String {
    format!("{:5.3}", score).trim_start_matches('0').to_string()
}

/// One benchmark column: display label plus the scores appended for it, in
/// row order.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub label: String,
    pub scores: Vec<f64>,
}

/// The assembled comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct ResultTable {
    /// Row labels, one per input file, in canonical variant order.
    pub rows: Vec<String>,
    /// Benchmark columns in the first file's order.
    pub columns: Vec<Column>,
}

/// Build the comparison table from a set of evaluation files.
///
/// Inputs are sorted by their variant's [`Variant::sort_key`] (stable, so
/// ties keep argument order). The first file in sorted order fixes the
/// benchmark columns and their order; every file must then report the same
/// number of benchmarks. Scores are appended to columns positionally, with
/// no name re-matching: a file that lists the same benchmarks in a different
/// order silently lands in the wrong columns unless `strict` is set, which
/// compares each file's label sequence against the first file's.
pub fn build_table(inputs: &[PathBuf], strict: bool) -> Result<ResultTable> {
    let mut keyed: Vec<(PathBuf, Variant)> = inputs
        .iter()
        .map(|path| Variant::from_filename(path).map(|v| (path.clone(), v)))
        .collect::<Result<_>>()?;
    keyed.sort_by_key(|(_, variant)| variant.sort_key());

    let Some((first_path, _)) = keyed.first() else {
        return Ok(ResultTable {
            rows: Vec::new(),
            columns: Vec::new(),
        });
    };

    let first = parse_evaluation(first_path)?;
    let mut columns: Vec<Column> = first
        .labels()
        .map(|label| Column {
            label: label.to_string(),
            scores: Vec::new(),
        })
        .collect();

    let rows: Vec<String> = keyed.iter().map(|(_, variant)| variant.to_string()).collect();

    for (path, _) in &keyed {
        let eval = parse_evaluation(path)?;

        if eval.len() != columns.len() {
            return Err(TableError::BenchmarkCountMismatch {
                path: path.clone(),
                expected: columns.len(),
                found: eval.len(),
            });
        }

        if strict {
            for (column, label) in columns.iter().zip(eval.labels()) {
                if column.label != label {
                    return Err(TableError::BenchmarkOrderMismatch {
                        path: path.clone(),
                        expected: column.label.clone(),
                        found: label.to_string(),
                    });
                }
            }
        }

        for (column, score) in columns.iter_mut().zip(eval.scores()) {
            column.scores.push(score);
        }
    }

    Ok(ResultTable { rows, columns })
}

impl ResultTable {
    /// Render the table as a booktabs LaTeX `tabular` block.
    ///
    /// Output is a pure function of the table contents: the same inputs
    /// always render byte-identically.
    pub fn to_latex(&self) -> String {
        // Column 0 holds the row labels; its header cell is the empty group.
        let label_width = self.rows.iter().map(|r| r.len()).chain([2]).max().unwrap_or(2);

        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| c.scores.iter().map(|&s| format_score(s)).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(column, formatted)| {
                formatted
                    .iter()
                    .map(|s| s.len())
                    .chain([column.label.len()])
                    .max()
                    .unwrap_or(column.label.len())
            })
            .collect();

        let mut out = String::new();
        out.push_str("\\begin{tabular}{l");
        for _ in &self.columns {
            out.push('r');
        }
        out.push_str("}\n\\toprule\n");

        out.push_str(&format!("{:<label_width$}", "{}"));
        for (column, &width) in self.columns.iter().zip(&widths) {
            out.push_str(&format!(" & {:>width$}", column.label));
        }
        out.push_str(" \\\\\n\\midrule\n");

        for (row_idx, row) in self.rows.iter().enumerate() {
            out.push_str(&format!("{row:<label_width$}"));
            for (formatted, &width) in cells.iter().zip(&widths) {
                out.push_str(&format!(" & {:>width$}", formatted[row_idx]));
            }
            out.push_str(" \\\\\n");
        }

        out.push_str("\\bottomrule\n\\end{tabular}\n");
        out
    }
}

/// Write the rendered table to a file, overwriting any existing content.
pub fn write_table(text: &str, path: &Path) -> Result<()> {
    fs::write(path, text).map_err(|e| TableError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_eval(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.842), ".842");
        assert_eq!(format_score(0.05), ".050");
        assert_eq!(format_score(0.5), ".500");
        assert_eq!(format_score(0.0), ".000");
    }

    #[test]
    fn test_format_score_above_one_keeps_digit() {
        // Only leading zeros are stripped, so these pass through unchanged.
        assert_eq!(format_score(1.234), "1.234");
        assert_eq!(format_score(12.3), "12.300");
    }

    #[test]
    fn test_format_score_negative() {
        assert_eq!(format_score(-0.5), "-0.500");
        assert_eq!(format_score(-1.2), "-1.200");
    }

    fn sample_inputs(dir: &TempDir) -> Vec<PathBuf> {
        // Deliberately passed in reverse of the canonical row order.
        vec![
            write_eval(dir, "vec2.retrofit.evaluation", "rw\n0.6\nmen-3000\n0.8\n"),
            write_eval(dir, "vec1.raw.evaluation", "rw\n0.5\nmen-3000\n0.7\n"),
        ]
    }

    #[test]
    fn test_build_table_end_to_end() {
        let dir = TempDir::new().unwrap();
        let table = build_table(&sample_inputs(&dir), false).unwrap();

        assert_eq!(table.rows, vec!["raw", "retrofitted"]);
        let labels: Vec<_> = table.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["RW", "MEN-3000"]);
        assert_eq!(table.columns[0].scores, vec![0.5, 0.6]);
        assert_eq!(table.columns[1].scores, vec![0.7, 0.8]);
    }

    #[test]
    fn test_render_end_to_end() {
        let dir = TempDir::new().unwrap();
        let table = build_table(&sample_inputs(&dir), false).unwrap();

        let expected = "\\begin{tabular}{lrr}\n\
                        \\toprule\n\
                        {}          &   RW & MEN-3000 \\\\\n\
                        \\midrule\n\
                        raw         & .500 &     .700 \\\\\n\
                        retrofitted & .600 &     .800 \\\\\n\
                        \\bottomrule\n\
                        \\end{tabular}\n";
        assert_eq!(table.to_latex(), expected);
    }

    #[test]
    fn test_output_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let inputs = sample_inputs(&dir);

        let out1 = dir.path().join("first.tex");
        let out2 = dir.path().join("second.tex");
        write_table(&build_table(&inputs, false).unwrap().to_latex(), &out1).unwrap();
        write_table(&build_table(&inputs, false).unwrap().to_latex(), &out2).unwrap();

        assert_eq!(
            fs::read(&out1).unwrap(),
            fs::read(&out2).unwrap(),
            "repeated runs over the same inputs must be byte-identical"
        );
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("table.tex");
        fs::write(&out, "stale content that is much longer than the new one").unwrap();

        write_table("fresh\n", &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "fresh\n");
    }

    #[test]
    fn test_rows_follow_canonical_order() {
        let dir = TempDir::new().unwrap();
        let inputs = vec![
            write_eval(&dir, "v.a.retrofit.l1.evaluation", "rw\n0.3\n"),
            write_eval(&dir, "v.a.standardize.x.y.evaluation", "rw\n0.2\n"),
            write_eval(&dir, "v.a.raw.x.y.z.evaluation", "rw\n0.1\n"),
        ];

        let table = build_table(&inputs, false).unwrap();
        assert_eq!(table.rows, vec!["raw", "standardized", "retrofitted (L1)"]);
        assert_eq!(table.columns[0].scores, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_reordered_benchmarks_misalign_silently() {
        // Known defect of positional alignment: same benchmarks, different
        // order, and the scores land in the wrong columns without complaint.
        let dir = TempDir::new().unwrap();
        let inputs = vec![
            write_eval(&dir, "v1.raw.evaluation", "rw\n0.5\nmen-3000\n0.7\n"),
            write_eval(&dir, "v2.retrofit.evaluation", "men-3000\n0.8\nrw\n0.6\n"),
        ];

        let table = build_table(&inputs, false).unwrap();
        assert_eq!(table.columns[0].label, "RW");
        assert_eq!(table.columns[0].scores, vec![0.5, 0.8]);
    }

    #[test]
    fn test_strict_detects_reordered_benchmarks() {
        let dir = TempDir::new().unwrap();
        let inputs = vec![
            write_eval(&dir, "v1.raw.evaluation", "rw\n0.5\nmen-3000\n0.7\n"),
            write_eval(&dir, "v2.retrofit.evaluation", "men-3000\n0.8\nrw\n0.6\n"),
        ];

        let err = build_table(&inputs, true).unwrap_err();
        assert!(matches!(
            err,
            TableError::BenchmarkOrderMismatch { ref expected, ref found, .. }
                if expected == "RW" && found == "MEN-3000"
        ));
    }

    #[test]
    fn test_benchmark_count_mismatch_is_fatal() {
        let dir = TempDir::new().unwrap();
        let inputs = vec![
            write_eval(&dir, "v1.raw.evaluation", "rw\n0.5\n"),
            write_eval(&dir, "v2.retrofit.evaluation", "rw\n0.6\nmen-3000\n0.8\n"),
        ];

        let err = build_table(&inputs, false).unwrap_err();
        assert!(matches!(
            err,
            TableError::BenchmarkCountMismatch { expected: 1, found: 2, .. }
        ));
    }

    #[test]
    fn test_bad_filename_is_fatal() {
        let inputs = vec![PathBuf::from("v1.raw.results")];
        let err = build_table(&inputs, false).unwrap_err();
        assert!(matches!(err, TableError::NotAnEvaluationFile(_)));
    }

    #[test]
    fn test_empty_input_list() {
        let table = build_table(&[], false).unwrap();
        assert!(table.rows.is_empty());
        assert!(table.columns.is_empty());
    }
}
