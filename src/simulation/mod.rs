//*** START FILE: src/simulation/mod.rs ***//
pub mod schedule;
pub mod simulator;
pub mod summary;

// Re-export the pieces the runner and the CLI reach for
pub use schedule::{parse_batch_size, Schedule, ScheduleSummary};
pub use simulator::{SimulationResult, Simulator};
pub use summary::{summarize, PopulationSummary};
//*** END FILE: src/simulation/mod.rs ***//
