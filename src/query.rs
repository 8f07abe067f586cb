//! Lookups over a collection of parsed races

use crate::stats::{RacerMatcher, SubstringMatcher};
use crate::types::ParsedRaceEmail;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

/// Criteria for selecting races. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceFilter {
    /// Case-insensitive substring of the race location
    pub location: Option<String>,

    /// Racer who must appear in the results (substring match)
    pub racer_name: Option<String>,

    /// Inclusive lower bound on the race date
    pub start: Option<NaiveDateTime>,

    /// Inclusive upper bound on the race date
    pub end: Option<NaiveDateTime>,
}

impl RaceFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn racer(mut self, racer_name: impl Into<String>) -> Self {
        self.racer_name = Some(racer_name.into());
        self
    }

    #[must_use]
    pub const fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub const fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn matches(&self, race: &ParsedRaceEmail) -> bool {
        let info = &race.race_info;

        if let Some(ref location) = self.location
            && !info
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
        {
            return false;
        }

        if let Some(ref racer) = self.racer_name
            && !race
                .results
                .iter()
                .any(|r| SubstringMatcher.matches(&r.racer, racer))
        {
            return false;
        }

        if self.start.is_some_and(|start| info.date < start) {
            return false;
        }

        !self.end.is_some_and(|end| info.date > end)
    }

    /// Races passing every criterion, in input order
    #[must_use]
    pub fn apply<'a>(&self, races: &'a [ParsedRaceEmail]) -> Vec<&'a ParsedRaceEmail> {
        races.iter().filter(|race| self.matches(race)).collect()
    }
}

/// Distinct race locations, sorted
#[must_use]
pub fn locations(races: &[ParsedRaceEmail]) -> Vec<String> {
    races
        .iter()
        .map(|r| r.race_info.location.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct racer names across all results, sorted
#[must_use]
pub fn racers(races: &[ParsedRaceEmail]) -> Vec<String> {
    races
        .iter()
        .flat_map(|r| r.results.iter().map(|res| res.racer.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Look a race up by its position in the collection
#[must_use]
pub fn race_by_index<'a>(races: &'a [ParsedRaceEmail], id: &str) -> Option<&'a ParsedRaceEmail> {
    id.trim().parse::<usize>().ok().and_then(|idx| races.get(idx))
}
