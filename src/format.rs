//! Fixed-width text rendering of a parsed race

use crate::types::ParsedRaceEmail;
use std::fmt;

const BANNER_WIDTH: usize = 60;
const DIVIDER_WIDTH: usize = 75;

/// Lap cell text; an unreadable count prints as `NaN`
fn lap_cell(lap: Option<u32>) -> String {
    lap.map_or_else(|| "NaN".to_string(), |n| n.to_string())
}

/// Human-readable results table for logs and terminals.
///
/// Long names are not truncated, so they push later columns out of line.
#[derive(Debug, Clone, Copy)]
pub struct ResultsTable<'a>(pub &'a ParsedRaceEmail);

impl fmt::Display for ResultsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = &self.0.race_info;
        let banner = "=".repeat(BANNER_WIDTH);

        writeln!(f)?;
        writeln!(f, "{banner}")?;
        writeln!(f, "Race: {} - {}", info.location, info.track)?;
        writeln!(f, "Date: {}", info.date.format("%-m/%-d/%Y, %-I:%M:%S %p"))?;
        writeln!(f, "{banner}")?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<4} {:<20} {:<8} {:<4} {:<6} {:<8} {:<8} K1RS",
            "Pos", "Racer", "Best", "Lap", "Total", "Avg", "Gap"
        )?;
        writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;

        for r in &self.0.results {
            writeln!(
                f,
                "{:<4} {:<20} {:<8} {:<4} {:<6} {:<8} {:<8} {}",
                r.position,
                r.racer,
                r.best_time,
                lap_cell(r.best_lap),
                lap_cell(r.laps),
                r.avg,
                r.gap,
                r.k1rs
            )?;
        }

        Ok(())
    }
}

/// Render a parsed race as a fixed-width table
#[must_use]
pub fn format_results(parsed: &ParsedRaceEmail) -> String {
    ResultsTable(parsed).to_string()
}
