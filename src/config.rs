use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, SimulationError, ValidationError};
use crate::simulation::schedule::Schedule;
use crate::types::cytometry::{CellPopulation, CvConfiguration, RawScheduleEntry};

pub const DEFAULT_CONFIG_FILE: &str = "cytocv.toml";

/// Static inputs: the population table plus the defaults the front end
/// pre-populates. Any key missing from the TOML file falls back to the
/// built-in value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub populations: Vec<CellPopulation>,
    pub default_schedule: Vec<RawScheduleEntry>,
    pub default_batch_size: u64,
    /// Batch CV the baseline population CVs were measured at.
    pub default_batch_cv: f64,
    pub default_realtime_cv: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            populations: vec![
                CellPopulation::new("CD3+", "T cells", 45.0, 0.4),
                CellPopulation::new("CD19+", "B cells", 7.0, 9.4),
                CellPopulation::new("CD14+HLADR-", "Monocytes", 8.0, 16.4),
                CellPopulation::new("CD14-HLADR-CD11b+CD33+", "e-MDSC", 0.5, 44.7),
                CellPopulation::new("CD56+", "NK cells", 7.0, 7.7),
            ],
            default_schedule: [
                ("1/1/2025", 4),
                ("1/3/2025", 5),
                ("1/5/2025", 2),
                ("1/7/2025", 2),
                ("1/12/2025", 2),
                ("1/17/2025", 4),
                ("1/21/2025", 5),
                ("1/24/2025", 1),
                ("1/27/2025", 5),
                ("1/29/2025", 5),
                ("1/31/2025", 9),
            ]
            .into_iter()
            .map(|(date, samples)| RawScheduleEntry::new(date, samples))
            .collect(),
            default_batch_size: 20,
            default_batch_cv: 4.56,
            default_realtime_cv: 7.21,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.populations.is_empty() {
            return Err(ConfigError::Invalid("at least one population is required".into()));
        }

        let mut seen = HashSet::new();
        for pop in &self.populations {
            if pop.id.trim().is_empty() {
                return Err(ConfigError::Invalid("population id must not be empty".into()));
            }
            if !seen.insert(pop.id.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate population id '{}'", pop.id)));
            }
            if !(pop.true_value.is_finite() && pop.true_value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "population '{}': true_value must be positive, got {}",
                    pop.id, pop.true_value
                )));
            }
            if !(pop.baseline_cv.is_finite() && pop.baseline_cv > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "population '{}': baseline_cv must be positive, got {}",
                    pop.id, pop.baseline_cv
                )));
            }
        }

        if self.default_batch_size == 0 {
            return Err(ConfigError::Invalid(
                SimulationError::InvalidBatchSize("0".into()).to_string(),
            ));
        }
        self.default_cv().map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.default_schedule()?;
        Ok(())
    }

    pub fn default_cv(&self) -> Result<CvConfiguration, SimulationError> {
        CvConfiguration::new(self.default_batch_cv, self.default_realtime_cv)
    }

    pub fn default_schedule(&self) -> Result<Schedule, ValidationError> {
        Schedule::from_raw(&self.default_schedule)
    }

    /// The default schedule as `MM/DD/YYYY: COUNT` lines.
    pub fn default_schedule_text(&self) -> Result<String, ValidationError> {
        self.default_schedule().map(|s| s.to_text())
    }
}

/// Loads `file_path` if given, the default file if it exists, and the
/// built-in configuration otherwise.
pub fn load_config_from_file(file_path: Option<&Path>) -> Result<Config, ConfigError> {
    match file_path {
        Some(path) => Config::load(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                Config::load(default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}
