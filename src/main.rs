//*** START FILE: src/main.rs ***//
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use cytocv::config::load_config_from_file;
use cytocv::logging::init_tracing;
use cytocv::report::ComparisonReport;
use cytocv::report_io::save_report;
use cytocv::runner::{resolve_schedule, run_comparison, ComparisonArgs};
use cytocv::simulation::parse_batch_size;

#[derive(Parser, Debug)]
#[command(name = "cytocv", version, about = "Compare batch vs real-time CV for simulated cytometry runs")]
struct Cli {
    /// TOML file with populations and defaults (falls back to ./cytocv.toml, then built-ins)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate both processing modes and print the summary table
    Simulate(SimulateArgs),
    /// Print the batch and real-time run sequences for a schedule
    Runs(ScheduleArgs),
    /// Print the default schedule in the input text format
    DefaultSchedule,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    /// Schedule file, one `MM/DD/YYYY: COUNT` entry per line
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Minimum pending samples that trigger a batch run
    #[arg(long)]
    batch_size: Option<String>,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    schedule: ScheduleArgs,

    /// Overall batch-mode CV in percent
    #[arg(long)]
    batch_cv: Option<f64>,

    /// Overall real-time-mode CV in percent
    #[arg(long)]
    realtime_cv: Option<f64>,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the full report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

impl ScheduleArgs {
    fn read_schedule(&self) -> anyhow::Result<Option<String>> {
        self.schedule
            .as_ref()
            .map(|path| fs::read_to_string(path).with_context(|| format!("failed to read schedule {}", path.display())))
            .transpose()
    }

    fn batch_size(&self) -> anyhow::Result<Option<u64>> {
        Ok(self.batch_size.as_deref().map(parse_batch_size).transpose()?)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(Some(cli.log_level.as_str()))?;

    let config = load_config_from_file(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Command::Simulate(args) => {
            let comparison_args = ComparisonArgs {
                schedule_text: args.schedule.read_schedule()?,
                batch_size: args.schedule.batch_size()?,
                batch_cv: args.batch_cv,
                realtime_cv: args.realtime_cv,
                seed: args.seed,
            };
            let report = run_comparison(&config, &comparison_args)?;

            println!("{}", report.render_schedule_summary());
            print!("{}", report.render_table());

            if let Some(path) = &args.json {
                save_report(&report, path)?;
                println!("\nReport written to {}", path.display());
            }
        }
        Command::Runs(args) => {
            let schedule_text = args.read_schedule()?;
            let schedule = resolve_schedule(&config, schedule_text.as_deref())?;
            let batch_size = args.batch_size()?.unwrap_or(config.default_batch_size);

            let batch_runs = schedule.batch_runs(batch_size)?;
            println!("Batch mode (batch size {batch_size}):");
            print!("{}", ComparisonReport::render_runs(&batch_runs));
            println!("\nReal-time mode:");
            print!("{}", ComparisonReport::render_runs(&schedule.realtime_runs()));
        }
        Command::DefaultSchedule => {
            println!("{}", config.default_schedule_text()?);
        }
    }

    Ok(())
}
//*** END FILE: src/main.rs ***//
