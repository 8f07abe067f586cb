//! Race metadata extraction from subject lines
//!
//! Recognizes subjects of the form
//! `Your Race Results at K1 Speed Anaheim T1 12/29/25 07:17 PM`.

use crate::config::ParserConfig;
use crate::error::{ParseError, Result};
use crate::types::RaceInfo;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*([AP]M)").unwrap());

static DEFAULT_SUBJECT_PARSER: LazyLock<SubjectParser> =
    LazyLock::new(|| SubjectParser::new(&ParserConfig::default()).unwrap());

/// Subject line matcher for one vendor
#[derive(Debug, Clone)]
pub struct SubjectParser {
    pattern: Regex,
    vendor: String,
    century_base: i32,
}

impl SubjectParser {
    /// Compile the subject pattern for a configuration
    pub fn new(config: &ParserConfig) -> Result<Self> {
        config.validate()?;

        let source = format!(
            r"(?i){} {}\s+(.+?)\s+(T\d+)\s+(\d{{1,2}}/\d{{1,2}}/\d{{2,4}})\s+(\d{{1,2}}:\d{{2}}\s*[AP]M)",
            regex::escape(config.lead_in.trim()),
            regex::escape(config.vendor.trim()),
        );
        let pattern = Regex::new(&source).map_err(|e| ParseError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            pattern,
            vendor: config.vendor.trim().to_string(),
            century_base: config.century_base,
        })
    }

    /// Extract location, track and start time from a subject.
    ///
    /// Returns `None` when the subject is not a result notification or its
    /// date/time does not denote a real calendar instant.
    #[must_use]
    pub fn parse(&self, subject: &str) -> Option<RaceInfo> {
        let caps = self.pattern.captures(subject)?;
        let location = caps.get(1)?.as_str();
        let track = caps.get(2)?.as_str();
        let date = self.parse_date(caps.get(3)?.as_str())?;
        let time = parse_time(caps.get(4)?.as_str())?;

        Some(RaceInfo {
            location: format!("{} {}", self.vendor, location.trim()),
            track: track.to_uppercase(),
            date: NaiveDateTime::new(date, time),
            raw_subject: subject.to_string(),
        })
    }

    fn parse_date(&self, s: &str) -> Option<NaiveDate> {
        let mut parts = s.split('/');
        let month: u32 = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;
        let year: i32 = parts.next()?.parse().ok()?;
        let year = if year < 100 {
            year.checked_add(self.century_base)?
        } else {
            year
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// 12-hour clock with meridiem to a 24-hour time
fn parse_time(s: &str) -> Option<NaiveTime> {
    let caps = TIME_REGEX.captures(s)?;
    let hours: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = caps.get(2)?.as_str().parse().ok()?;
    let pm = caps.get(3)?.as_str().eq_ignore_ascii_case("PM");

    let hours = match (pm, hours) {
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, 12) => 0,
        (false, h) => h,
    };

    NaiveTime::from_hms_opt(hours, minutes, 0)
}

impl Default for SubjectParser {
    fn default() -> Self {
        DEFAULT_SUBJECT_PARSER.clone()
    }
}

/// Parse a subject with the default vendor configuration
#[must_use]
pub fn parse_subject(subject: &str) -> Option<RaceInfo> {
    DEFAULT_SUBJECT_PARSER.parse(subject)
}
