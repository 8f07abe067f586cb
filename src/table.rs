//! Results table extraction
//!
//! A results table is one row per line with cells separated by tabs or by
//! runs of two or more spaces:
//!
//! ```text
//! #   Racer       Best Time  Best Lap  Laps  Avg.    Gap    K1RS
//! 1   Kevin Ruiz  28.844     8         11    36.975  0.000  1244 (+44)
//! ```

use crate::types::RaceResult;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::trace;

/// Minimum number of cells in a data row
pub const MIN_ROW_FIELDS: usize = 8;

static CELL_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t+|\s{2,}").unwrap());

static ROW_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s").unwrap());

/// Parse one line of a results table.
///
/// Returns `None` for lines with fewer than eight cells or a non-numeric
/// first cell, which is how header and footer lines are told apart from rows.
/// Non-integer lap cells (e.g. `--` for a racer with no timed lap) keep the
/// row and leave the field empty.
#[must_use]
pub fn parse_result_row(line: &str) -> Option<RaceResult> {
    let parts: Vec<&str> = CELL_SEPARATOR
        .split(line)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() < MIN_ROW_FIELDS {
        return None;
    }

    Some(RaceResult {
        position: parts[0].parse().ok()?,
        racer: parts[1].to_string(),
        best_time: parts[2].to_string(),
        best_lap: parts[3].parse().ok(),
        laps: parts[4].parse().ok(),
        avg: parts[5].to_string(),
        gap: parts[6].to_string(),
        k1rs: parts[7].to_string(),
    })
}

/// A row candidate the row parser rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    /// 1-based line number within the scanned body
    pub line_number: usize,
    pub line: String,
}

/// What a table scan left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanDiagnostics {
    /// Lines that looked like rows but did not parse
    pub skipped: Vec<SkippedRow>,

    /// Non-blank lines that were neither header nor row candidates
    pub ignored_lines: usize,
}

impl ScanDiagnostics {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Results of scanning one body, with diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableScan {
    pub results: Vec<RaceResult>,
    pub diagnostics: ScanDiagnostics,
}

fn is_header(trimmed: &str) -> bool {
    trimmed
        .strip_prefix('#')
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// Scan a body for result rows, keeping track of what was dropped
#[must_use]
pub fn scan_results_table(body: &str) -> TableScan {
    let mut scan = TableScan::default();

    for (idx, line) in body.split('\n').enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || is_header(trimmed) {
            continue;
        }

        if !ROW_CANDIDATE.is_match(trimmed) {
            scan.diagnostics.ignored_lines += 1;
            continue;
        }

        if let Some(result) = parse_result_row(trimmed) {
            scan.results.push(result);
        } else {
            trace!("Skipping malformed result row {}: {}", idx + 1, trimmed);
            scan.diagnostics.skipped.push(SkippedRow {
                line_number: idx + 1,
                line: trimmed.to_string(),
            });
        }
    }

    scan
}

/// Parse every result row in a body, in order of appearance
#[must_use]
pub fn parse_results_table(body: &str) -> Vec<RaceResult> {
    scan_results_table(body).results
}
