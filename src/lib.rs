//*** START FILE: src/lib.rs ***//

// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod logging;
pub mod parsing;
pub mod report;
pub mod report_io;
pub mod runner;
pub mod simulation;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, CytoError, ReportError, SimulationError, ValidationError};
pub use report::ComparisonReport;
pub use runner::{run_comparison, ComparisonArgs};
pub use simulation::{Schedule, SimulationResult, Simulator};
pub use types::{CellPopulation, CvConfiguration, ProcessingMode, ProcessingRun, ScheduleEntry};

//*** END FILE: src/lib.rs ***//
