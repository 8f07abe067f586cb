//! Core types for parsed race emails
//!
//! Field names serialize in camelCase; these structs are the JSON schema
//! consumed by downstream storage and API layers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One racer's line from a results table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    /// Finishing rank within the race
    pub position: u32,

    /// Racer name as printed by the venue
    pub racer: String,

    /// Best lap time in seconds, verbatim (e.g. "28.844")
    pub best_time: String,

    /// Lap number on which the best time was set; `None` (JSON `null`)
    /// when the cell is not an integer
    pub best_lap: Option<u32>,

    /// Total laps completed; `None` when the cell is not an integer
    pub laps: Option<u32>,

    /// Average lap time, verbatim
    pub avg: String,

    /// Gap to the leader, verbatim
    pub gap: String,

    /// Venue ranking score with its change, e.g. "1244 (+44)"
    pub k1rs: String,
}

impl RaceResult {
    /// Best time as seconds, if the source text is numeric
    #[must_use]
    pub fn best_time_seconds(&self) -> Option<f64> {
        self.best_time
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite())
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.position == 1
    }

    #[must_use]
    pub const fn is_podium(&self) -> bool {
        self.position <= 3
    }
}

impl fmt::Display for RaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{} {} ({})", self.position, self.racer, self.best_time)
    }
}

/// Race metadata recovered from the subject line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceInfo {
    /// Vendor-prefixed branch, e.g. "K1 Speed Anaheim"
    pub location: String,

    /// Upper-cased track identifier, e.g. "T1"
    pub track: String,

    /// Local start time of the session, no timezone attached
    pub date: NaiveDateTime,

    /// Subject line exactly as received
    pub raw_subject: String,
}

/// A race email whose subject was recognized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRaceEmail {
    pub race_info: RaceInfo,

    /// Results in the order the venue ranked them
    pub results: Vec<RaceResult>,

    /// Plain text body as received, if the message had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_body: Option<String>,
}

impl ParsedRaceEmail {
    /// A recognized race whose body yielded no rows
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A result tagged with the race it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacerRaceResult {
    pub date: NaiveDateTime,
    pub location: String,
    pub track: String,

    #[serde(flatten)]
    pub result: RaceResult,
}

impl RacerRaceResult {
    #[must_use]
    pub fn new(info: &RaceInfo, result: &RaceResult) -> Self {
        Self {
            date: info.date,
            location: info.location.clone(),
            track: info.track.clone(),
            result: result.clone(),
        }
    }
}

/// Aggregate performance of one racer
///
/// `races == 0` means no race matched; every optional field is then `None`
/// and the value must be treated as "not found", not as a zero record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacerStats {
    /// The queried name, echoed back unchanged
    pub racer: String,

    /// Number of races containing a match
    pub races: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_best_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_position: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wins: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub podiums: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<RacerRaceResult>>,
}

impl RacerStats {
    /// The "no data" sentinel for a racer
    pub fn not_found(racer: impl Into<String>) -> Self {
        Self {
            racer: racer.into(),
            races: 0,
            best_time: None,
            avg_best_time: None,
            avg_position: None,
            wins: None,
            podiums: None,
            results: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.races == 0
    }

    /// Map the sentinel to `None` at an API boundary
    #[must_use]
    pub fn found(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}
