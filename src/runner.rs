//*** START FILE: src/runner.rs ***//
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::report::ComparisonReport;
use crate::simulation::{summarize, Schedule, ScheduleSummary, Simulator};
use crate::types::cytometry::{CvConfiguration, ProcessingMode};

/// Per-invocation inputs. `None` fields fall back to the config defaults.
#[derive(Debug, Clone, Default)]
pub struct ComparisonArgs {
    pub schedule_text: Option<String>,
    pub batch_size: Option<u64>,
    pub batch_cv: Option<f64>,
    pub realtime_cv: Option<f64>,
    /// Fixed seed for reproducible draws; fresh entropy otherwise.
    pub seed: Option<u64>,
}

pub fn resolve_schedule(config: &Config, schedule_text: Option<&str>) -> Result<Schedule> {
    let schedule = match schedule_text {
        Some(text) => Schedule::validate(text)?,
        None => config.default_schedule()?,
    };
    Ok(schedule)
}

/// Validates the inputs, derives both run sequences, simulates both modes
/// and summarizes them. Nothing is simulated if any input is invalid.
pub fn run_comparison(config: &Config, args: &ComparisonArgs) -> Result<ComparisonReport> {
    let schedule = resolve_schedule(config, args.schedule_text.as_deref())?;
    let batch_size = args.batch_size.unwrap_or(config.default_batch_size);

    let cv = CvConfiguration::new(
        args.batch_cv.unwrap_or(config.default_batch_cv),
        args.realtime_cv.unwrap_or(config.default_realtime_cv),
    )?;
    let simulator = Simulator::configure(cv, config.default_batch_cv)?;

    let batch_runs = schedule.batch_runs(batch_size)?;
    let realtime_runs = schedule.realtime_runs();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    // batch first, then real-time: a fixed seed reproduces both modes
    let batch = simulator.simulate(&batch_runs, &config.populations, ProcessingMode::Batch, &mut rng)?;
    let realtime = simulator.simulate(&realtime_runs, &config.populations, ProcessingMode::RealTime, &mut rng)?;

    let summaries = summarize(&config.populations, &batch, &realtime);
    let schedule_summary = ScheduleSummary::new(&schedule, &batch_runs, &realtime_runs);

    info!(
        total_samples = schedule_summary.total_samples,
        batch_runs = schedule_summary.batch_runs,
        realtime_runs = schedule_summary.realtime_runs,
        realtime_scale = simulator.realtime_scale(),
        "comparison finished"
    );

    Ok(ComparisonReport {
        schedule_summary,
        batch_size,
        cv,
        seed: args.seed,
        populations: config.populations.clone(),
        batch_runs,
        realtime_runs,
        batch,
        realtime,
        summaries,
    })
}
//*** END FILE: src/runner.rs ***//
