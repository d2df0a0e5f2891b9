//*** START FILE: src/simulation/schedule.rs ***//
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimulationError, ValidationError};
use crate::parsing::schedule_parser::{add_to_total, format_schedule_text, parse_raw_entries, parse_schedule_text};
use crate::types::cytometry::{ProcessingRun, RawScheduleEntry, ScheduleEntry};

/// A validated, chronologically sorted sample-arrival schedule.
///
/// Always holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Parses and validates schedule text (`MM/DD/YYYY: COUNT` per line).
    pub fn validate(text: &str) -> Result<Self, ValidationError> {
        Self::from_entries(parse_schedule_text(text)?)
    }

    /// Validates raw (date, count) pairs.
    pub fn from_raw(raw: &[RawScheduleEntry]) -> Result<Self, ValidationError> {
        Self::from_entries(parse_raw_entries(raw)?)
    }

    /// Entries built in code skip the parser, so the total is checked here as
    /// well. Run derivation relies on it fitting in a `u64`.
    pub fn from_entries(mut entries: Vec<ScheduleEntry>) -> Result<Self, ValidationError> {
        if entries.is_empty() {
            return Err(ValidationError::EmptySchedule);
        }
        entries
            .iter()
            .enumerate()
            .try_fold(0u64, |total, (index, e)| add_to_total(index + 1, total, e.sample_count))?;
        // sort_by_key is stable: same-day entries keep their input order
        entries.sort_by_key(|e| e.date);
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_samples(&self) -> u64 {
        self.entries.iter().map(|e| e.sample_count).sum()
    }

    /// One run per entry: every arrival is processed the day it comes in.
    pub fn realtime_runs(&self) -> Vec<ProcessingRun> {
        let mut accumulated = 0;
        self.entries
            .iter()
            .map(|entry| {
                accumulated += entry.sample_count;
                ProcessingRun {
                    date: entry.date,
                    sample_count: entry.sample_count,
                    accumulated_count: accumulated,
                }
            })
            .collect()
    }

    /// Accumulates arrivals and flushes a run once the pending count reaches
    /// `batch_size`. The check happens only between entries, so one entry is
    /// never split and a run may exceed `batch_size`. Leftover samples become
    /// a final run dated on the last entry.
    pub fn batch_runs(&self, batch_size: u64) -> Result<Vec<ProcessingRun>, SimulationError> {
        if batch_size == 0 {
            return Err(SimulationError::InvalidBatchSize(batch_size.to_string()));
        }

        let mut runs = Vec::new();
        let mut accumulated = 0;
        let mut current_batch = 0;

        for entry in &self.entries {
            current_batch += entry.sample_count;
            accumulated += entry.sample_count;

            if current_batch >= batch_size {
                runs.push(ProcessingRun {
                    date: entry.date,
                    sample_count: current_batch,
                    accumulated_count: accumulated,
                });
                current_batch = 0;
            }
        }

        if current_batch > 0 {
            if let Some(last) = self.entries.last() {
                runs.push(ProcessingRun {
                    date: last.date,
                    sample_count: current_batch,
                    accumulated_count: accumulated,
                });
            }
        }

        debug!(batch_size, runs = runs.len(), total = accumulated, "derived batch runs");
        Ok(runs)
    }

    pub fn to_text(&self) -> String {
        format_schedule_text(&self.entries)
    }
}

/// Parses a user-supplied batch size. Anything but a positive integer is rejected.
pub fn parse_batch_size(raw: &str) -> Result<u64, SimulationError> {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(SimulationError::InvalidBatchSize(trimmed.to_string())),
    }
}

/// Headline numbers shown next to the comparison.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub total_samples: u64,
    pub batch_runs: usize,
    pub realtime_runs: usize,
}

impl ScheduleSummary {
    pub fn new(schedule: &Schedule, batch_runs: &[ProcessingRun], realtime_runs: &[ProcessingRun]) -> Self {
        Self {
            total_samples: schedule.total_samples(),
            batch_runs: batch_runs.len(),
            realtime_runs: realtime_runs.len(),
        }
    }
}

//*** END FILE: src/simulation/schedule.rs ***//
