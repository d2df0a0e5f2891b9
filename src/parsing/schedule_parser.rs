//*** START FILE: src/parsing/schedule_parser.rs ***//
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::error::ValidationError;
use crate::types::cytometry::{RawScheduleEntry, ScheduleEntry};

pub const DATE_FORMAT: &str = "%m/%d/%Y";

// Exactly one ':' per line. Anything else is a structural problem, not a bad date/count.
fn entry_regex() -> &'static Regex {
    static ENTRY_RE: OnceLock<Regex> = OnceLock::new();
    ENTRY_RE.get_or_init(|| Regex::new(r"^([^:]*):([^:]*)$").expect("entry regex is valid"))
}

// chrono's %Y takes any number of year digits, so the shape is checked first
fn date_regex() -> &'static Regex {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    DATE_RE.get_or_init(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("date regex is valid"))
}

/// Parses schedule text with one `MM/DD/YYYY: COUNT` entry per line.
///
/// Blank lines and lines starting with `#` are skipped. The entries come back
/// in input order; sorting is the schedule's job.
pub fn parse_schedule_text(content: &str) -> Result<Vec<ScheduleEntry>, ValidationError> {
    let mut entries = Vec::new();
    let mut total: u64 = 0;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let caps = entry_regex()
            .captures(line_trimmed)
            .ok_or_else(|| ValidationError::MalformedEntry {
                line: line_no,
                value: line_trimmed.to_string(),
            })?;
        let date_str = caps.get(1).map_or("", |m| m.as_str());
        let count_str = caps.get(2).map_or("", |m| m.as_str());

        let date = parse_date(line_no, date_str)?;
        let sample_count = parse_count(line_no, count_str)?;
        total = add_to_total(line_no, total, sample_count)?;
        entries.push(ScheduleEntry { date, sample_count });
    }

    debug!(entries = entries.len(), "parsed schedule text");
    Ok(entries)
}

/// Validates already-split (date, count) pairs, e.g. from a config file.
/// Line numbers in errors are the 1-based positions in `raw`.
pub fn parse_raw_entries(raw: &[RawScheduleEntry]) -> Result<Vec<ScheduleEntry>, ValidationError> {
    let mut total: u64 = 0;
    raw.iter()
        .enumerate()
        .map(|(index, entry)| {
            let line_no = index + 1;
            let date = parse_date(line_no, &entry.date)?;
            let sample_count = check_positive(line_no, entry.samples)?;
            total = add_to_total(line_no, total, sample_count)?;
            Ok(ScheduleEntry { date, sample_count })
        })
        .collect()
}

/// Adds one entry to the schedule total. A total that no longer fits in a
/// `u64` is reported against the entry that pushed it over.
pub(crate) fn add_to_total(line: usize, total: u64, sample_count: u64) -> Result<u64, ValidationError> {
    total.checked_add(sample_count).ok_or_else(|| ValidationError::InvalidCount {
        line,
        value: sample_count.to_string(),
    })
}

pub fn parse_date(line: usize, raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if !date_regex().is_match(trimmed) {
        return Err(ValidationError::InvalidDateFormat {
            line,
            value: trimmed.to_string(),
        });
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| ValidationError::InvalidDateFormat {
        line,
        value: trimmed.to_string(),
    })
}

fn parse_count(line: usize, raw: &str) -> Result<u64, ValidationError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| ValidationError::InvalidCount {
        line,
        value: trimmed.to_string(),
    })?;
    check_positive(line, value)
}

fn check_positive(line: usize, value: i64) -> Result<u64, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NonPositiveCount { line, value });
    }
    // value > 0 here, so the conversion cannot fail
    u64::try_from(value).map_err(|_| ValidationError::NonPositiveCount { line, value })
}

/// Renders entries back into the text form accepted by `parse_schedule_text`.
pub fn format_schedule_text(entries: &[ScheduleEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}: {}", e.date.format(DATE_FORMAT), e.sample_count))
        .collect::<Vec<_>>()
        .join("\n")
}

//*** END FILE: src/parsing/schedule_parser.rs ***//
