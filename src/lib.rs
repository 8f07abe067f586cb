// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Kart Race Results Parser
//!
//! Extracts typed race records from a karting venue's result notification
//! emails and aggregates them into per-racer statistics.
//!
//! # Features
//!
//! - Subject line recognition (location, track, local start time)
//! - Results tables from plain text or HTML bodies, with HTML fallback
//! - Skip-and-continue handling of noise, with diagnostics
//! - Per-racer statistics behind a swappable name matching rule
//!
//! # Example
//!
//! ```rust
//! use kart_results::{get_racer_stats, parse_race_email};
//!
//! let subject = "Your Race Results at K1 Speed Anaheim T1 12/29/25 07:17 PM";
//! let body = "#\tRacer\tBest Time\tBest Lap\tLaps\tAvg.\tGap\tK1RS\n\
//!             1\tKevin Ruiz\t28.844\t8\t11\t36.975\t0.000\t1244 (+44)\n";
//!
//! let race = parse_race_email(subject, Some(body), None).unwrap();
//! assert_eq!(race.race_info.location, "K1 Speed Anaheim");
//!
//! let stats = get_racer_stats(&[race], "kevin");
//! assert_eq!(stats.wins, Some(1));
//! ```

mod config;
mod error;
mod format;
mod html;
mod parser;
mod query;
mod stats;
mod subject;
mod table;
mod types;

pub use config::{DEFAULT_CENTURY_BASE, DEFAULT_LEAD_IN, DEFAULT_VENDOR, ParserConfig};
pub use error::{ParseError, Result};
pub use format::{ResultsTable, format_results};
pub use html::extract_text_from_html;
pub use parser::{
    BatchReport, ParsedOutcome, RaceEmailParser, RaceMessage, ResultsSource, parse_race_email,
};
pub use query::{RaceFilter, locations, race_by_index, racers};
pub use stats::{ExactMatcher, RacerMatcher, StatsAggregator, SubstringMatcher, get_racer_stats};
pub use subject::{SubjectParser, parse_subject};
pub use table::{
    MIN_ROW_FIELDS, ScanDiagnostics, SkippedRow, TableScan, parse_result_row, parse_results_table,
    scan_results_table,
};
pub use types::*;
