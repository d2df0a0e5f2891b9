//*** START FILE: src/types/cytometry.rs ***//
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimulationError;

/// One validated line of the sample-arrival schedule.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub sample_count: u64,
}

/// A (date, count) pair exactly as the user or a config file supplied it,
/// before any validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawScheduleEntry {
    pub date: String,
    pub samples: i64,
}

impl RawScheduleEntry {
    pub fn new(date: impl Into<String>, samples: i64) -> Self {
        Self { date: date.into(), samples }
    }
}

/// A single processing event on the instrument.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingRun {
    pub date: NaiveDate,
    pub sample_count: u64,
    /// Samples seen so far across the whole schedule, this run included.
    pub accumulated_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CellPopulation {
    pub id: String,
    pub name: String,
    /// Expected frequency in percent.
    pub true_value: f64,
    /// Batch-mode CV in percent, before rescaling to the configured CVs.
    pub baseline_cv: f64,
}

impl CellPopulation {
    pub fn new(id: impl Into<String>, name: impl Into<String>, true_value: f64, baseline_cv: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            true_value,
            baseline_cv,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    Batch,
    RealTime,
}

impl ProcessingMode {
    pub const ALL: [ProcessingMode; 2] = [ProcessingMode::Batch, ProcessingMode::RealTime];

    pub fn label(self) -> &'static str {
        match self {
            ProcessingMode::Batch => "Batch",
            ProcessingMode::RealTime => "Real-Time",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall CVs (percent) the user wants each processing mode to exhibit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CvConfiguration {
    pub batch_cv: f64,
    pub realtime_cv: f64,
}

impl CvConfiguration {
    pub fn new(batch_cv: f64, realtime_cv: f64) -> Result<Self, SimulationError> {
        let cv = Self { batch_cv, realtime_cv };
        cv.validate()?;
        Ok(cv)
    }

    /// Both values must be finite and strictly positive. Deserialized values
    /// bypass `new`, so the simulator calls this again at configure time.
    pub fn validate(&self) -> Result<(), SimulationError> {
        check_positive_cv("batch_cv", self.batch_cv)?;
        check_positive_cv("realtime_cv", self.realtime_cv)
    }

    pub fn realtime_scale(&self) -> f64 {
        self.realtime_cv / self.batch_cv
    }
}

pub(crate) fn check_positive_cv(field: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidCvConfiguration { field, value })
    }
}

//*** END FILE: src/types/cytometry.rs ***//
