//! Per-racer statistics over accumulated race history

use crate::types::{ParsedRaceEmail, RacerRaceResult, RacerStats};
use tracing::debug;

/// Decides whether a stored racer name answers a query
pub trait RacerMatcher {
    fn matches(&self, stored: &str, query: &str) -> bool;
}

/// Case-insensitive substring match: "lee" finds both "Lee" and "Leeroy".
/// This is the venue-data compatible default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl RacerMatcher for SubstringMatcher {
    fn matches(&self, stored: &str, query: &str) -> bool {
        stored.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Case-insensitive whole-name match
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl RacerMatcher for ExactMatcher {
    fn matches(&self, stored: &str, query: &str) -> bool {
        stored.trim().to_lowercase() == query.trim().to_lowercase()
    }
}

impl<F> RacerMatcher for F
where
    F: Fn(&str, &str) -> bool,
{
    fn matches(&self, stored: &str, query: &str) -> bool {
        self(stored, query)
    }
}

/// Computes [`RacerStats`] using a configurable name matching rule
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator<M = SubstringMatcher> {
    matcher: M,
}

impl<M: RacerMatcher> StatsAggregator<M> {
    pub const fn new(matcher: M) -> Self {
        Self { matcher }
    }

    /// Collect the racer's result from every race they appear in.
    ///
    /// Only the first matching result of a race is taken. Races keep their
    /// input order.
    pub fn racer_results(&self, races: &[ParsedRaceEmail], racer: &str) -> Vec<RacerRaceResult> {
        races
            .iter()
            .filter_map(|race| {
                race.results
                    .iter()
                    .find(|r| self.matcher.matches(&r.racer, racer))
                    .map(|r| RacerRaceResult::new(&race.race_info, r))
            })
            .collect()
    }

    /// Aggregate the racer's history. Returns the `races == 0` sentinel when
    /// no race matched.
    pub fn get_racer_stats(&self, races: &[ParsedRaceEmail], racer: &str) -> RacerStats {
        let results = self.racer_results(races, racer);
        if results.is_empty() {
            debug!("No races found for racer {}", racer);
            return RacerStats::not_found(racer);
        }

        let times: Vec<f64> = results
            .iter()
            .filter_map(|r| r.result.best_time_seconds())
            .collect();

        let (best_time, avg_best_time) = if times.is_empty() {
            (None, None)
        } else {
            let best = times.iter().copied().fold(f64::INFINITY, f64::min);
            #[allow(clippy::cast_precision_loss)]
            let mean = times.iter().sum::<f64>() / times.len() as f64;
            (Some(to_fixed(best, 3)), Some(to_fixed(mean, 3)))
        };

        #[allow(clippy::cast_precision_loss)]
        let avg_position = results
            .iter()
            .map(|r| f64::from(r.result.position))
            .sum::<f64>()
            / results.len() as f64;
        let wins = results.iter().filter(|r| r.result.is_win()).count();
        let podiums = results.iter().filter(|r| r.result.is_podium()).count();

        RacerStats {
            racer: racer.to_string(),
            races: results.len(),
            best_time,
            avg_best_time,
            avg_position: Some(to_fixed(avg_position, 1)),
            wins: Some(wins),
            podiums: Some(podiums),
            results: Some(results),
        }
    }
}

/// Round to `digits` decimals the way JavaScript's `toFixed` does: nearest
/// to the exact value of the double, exact ties away from zero.
///
/// `{:.N}` already rounds the exact value but sends ties to even, so only
/// exact ties need handling.
fn to_fixed(value: f64, digits: usize) -> String {
    // Every finite f64 has at most 1074 fraction digits, so this is exact.
    let exact = format!("{:.1100}", value.abs());
    let Some((int_part, frac_part)) = exact.split_once('.') else {
        return format!("{value:.digits$}");
    };

    let tail = &frac_part[digits..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{value:.digits$}");
    }

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..digits].bytes())
        .collect();
    let mut carry = true;
    for d in kept.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
            break;
        }
    }
    if carry {
        kept.insert(0, b'1');
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&kept[..split]));
    if digits > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&kept[split..]));
    }
    out
}

/// Aggregate a racer's history using substring name matching
#[must_use]
pub fn get_racer_stats(races: &[ParsedRaceEmail], racer: &str) -> RacerStats {
    StatsAggregator::<SubstringMatcher>::default().get_racer_stats(races, racer)
}
