//*** START FILE: src/error.rs ***//
use std::path::PathBuf;

/// Problems found while turning schedule text (or raw date/count pairs) into
/// validated entries. Line numbers are 1-based and count every input line,
/// including skipped blank/comment lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("line {line}: invalid date '{value}' (expected MM/DD/YYYY)")]
    InvalidDateFormat { line: usize, value: String },

    #[error("line {line}: sample count must be positive, got {value}")]
    NonPositiveCount { line: usize, value: i64 },

    #[error("line {line}: sample count '{value}' is not an integer")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: expected 'MM/DD/YYYY: COUNT', got '{value}'")]
    MalformedEntry { line: usize, value: String },

    #[error("schedule contains no entries")]
    EmptySchedule,
}

/// Failures of run derivation and of the measurement simulator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid CV configuration: {field} must be a positive number, got {value}")]
    InvalidCvConfiguration { field: &'static str, value: f64 },

    #[error("invalid batch size '{0}': must be a positive integer")]
    InvalidBatchSize(String),

    #[error("population id '{0}' appears more than once")]
    DuplicatePopulation(String),

    #[error("population '{population}' cannot be sampled: {reason}")]
    InvalidDistribution { population: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("default schedule is invalid: {0}")]
    DefaultSchedule(#[from] ValidationError),
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to access report file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize report {path:?}: {source}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error for anything the crate can report.
#[derive(Debug, thiserror::Error)]
pub enum CytoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T, E = CytoError> = std::result::Result<T, E>;
//*** END FILE: src/error.rs ***//
