//! Race email parser: subject metadata plus results table

use crate::config::ParserConfig;
use crate::error::{ParseError, Result};
use crate::html::extract_text_from_html;
use crate::subject::SubjectParser;
use crate::table::{ScanDiagnostics, TableScan, scan_results_table};
use crate::types::ParsedRaceEmail;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

static DEFAULT_PARSER: LazyLock<RaceEmailParser> = LazyLock::new(RaceEmailParser::default);

/// A message as handed over by the mail retrieval layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceMessage {
    pub subject: String,

    /// Plain text body
    pub text: Option<String>,

    /// HTML body
    pub html: Option<String>,
}

impl RaceMessage {
    /// Decode raw RFC 5322 bytes, keeping the first plain text and first
    /// HTML part found in the MIME tree.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        let parsed =
            mailparse::parse_mail(raw).map_err(|e| ParseError::Structure(e.to_string()))?;

        let subject = parsed
            .headers
            .iter()
            .find(|h| h.get_key().eq_ignore_ascii_case("subject"))
            .map(mailparse::MailHeader::get_value)
            .ok_or_else(|| ParseError::MissingHeader("Subject".into()))?;

        let mut text = None;
        let mut html = None;
        collect_body_parts(&parsed, &mut text, &mut html);

        Ok(Self {
            subject,
            text,
            html,
        })
    }
}

fn collect_body_parts(
    parsed: &mailparse::ParsedMail,
    text: &mut Option<String>,
    html: &mut Option<String>,
) {
    if parsed.subparts.is_empty() {
        let content_type = parsed.ctype.mimetype.to_lowercase();
        if let Ok(body) = parsed.get_body() {
            if content_type.contains("text/html") {
                if html.is_none() {
                    *html = Some(body);
                }
            } else if content_type.contains("text/plain") && text.is_none() {
                *text = Some(body);
            }
        }
        return;
    }

    for part in &parsed.subparts {
        collect_body_parts(part, text, html);
    }
}

/// Which body the results were taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultsSource {
    Text,
    Html,
    /// Neither body produced a row
    Empty,
}

/// A parsed email together with how its results were obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOutcome {
    pub email: ParsedRaceEmail,
    pub source: ResultsSource,

    /// Diagnostics of the scan whose results were kept
    pub diagnostics: ScanDiagnostics,
}

/// Totals for a batch of messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Recognized races, in input order
    pub races: Vec<ParsedRaceEmail>,

    /// Subjects of messages that were not race notifications
    pub rejected: Vec<String>,

    /// Row candidates dropped across all accepted races
    pub skipped_rows: usize,
}

/// Parses vendor race emails. Build once and share; parsing is stateless.
#[derive(Debug, Clone, Default)]
pub struct RaceEmailParser {
    subject: SubjectParser,
}

impl RaceEmailParser {
    pub fn new(config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            subject: SubjectParser::new(config)?,
        })
    }

    #[must_use]
    pub const fn subject_parser(&self) -> &SubjectParser {
        &self.subject
    }

    /// Parse one email. `None` means the subject is not a race notification.
    #[must_use]
    pub fn parse(
        &self,
        subject: &str,
        text: Option<&str>,
        html: Option<&str>,
    ) -> Option<ParsedRaceEmail> {
        self.parse_detailed(subject, text, html)
            .map(|outcome| outcome.email)
    }

    /// Parse one email and report which body supplied the rows.
    ///
    /// The HTML body is consulted whenever the text body gave no rows, both
    /// when it is missing and when it parsed to nothing.
    #[must_use]
    pub fn parse_detailed(
        &self,
        subject: &str,
        text: Option<&str>,
        html: Option<&str>,
    ) -> Option<ParsedOutcome> {
        let race_info = self.subject.parse(subject)?;

        let mut scan = text.map(scan_results_table).unwrap_or_default();
        let mut source = ResultsSource::Text;

        if scan.results.is_empty()
            && let Some(html) = html
        {
            scan = scan_results_table(&extract_text_from_html(html));
            source = ResultsSource::Html;
        }

        if scan.results.is_empty() {
            source = ResultsSource::Empty;
        }

        let TableScan {
            results,
            diagnostics,
        } = scan;

        debug!(
            "Parsed race email: {} ({} results from {:?})",
            subject,
            results.len(),
            source
        );

        Some(ParsedOutcome {
            email: ParsedRaceEmail {
                race_info,
                results,
                raw_body: text.map(str::to_string),
            },
            source,
            diagnostics,
        })
    }

    /// Parse a message handed over by the mail layer
    #[must_use]
    pub fn parse_message(&self, message: &RaceMessage) -> Option<ParsedRaceEmail> {
        self.parse(
            &message.subject,
            message.text.as_deref(),
            message.html.as_deref(),
        )
    }

    /// Parse many messages, skipping those that are not race notifications
    pub fn parse_batch<'a, I>(&self, messages: I) -> BatchReport
    where
        I: IntoIterator<Item = &'a RaceMessage>,
    {
        let mut report = BatchReport::default();

        for message in messages {
            match self.parse_detailed(
                &message.subject,
                message.text.as_deref(),
                message.html.as_deref(),
            ) {
                Some(outcome) => {
                    report.skipped_rows += outcome.diagnostics.skipped.len();
                    report.races.push(outcome.email);
                }
                None => {
                    warn!("Could not parse: {}", message.subject);
                    report.rejected.push(message.subject.clone());
                }
            }
        }

        info!(
            "Parsed {} race(s), rejected {}, skipped {} row(s)",
            report.races.len(),
            report.rejected.len(),
            report.skipped_rows
        );

        report
    }
}

/// Parse one email with the default vendor configuration
#[must_use]
pub fn parse_race_email(
    subject: &str,
    text: Option<&str>,
    html: Option<&str>,
) -> Option<ParsedRaceEmail> {
    DEFAULT_PARSER.parse(subject, text, html)
}
