use cytocv::config::Config;
use cytocv::report_io::{load_report, save_report};
use cytocv::runner::{run_comparison, ComparisonArgs};
use cytocv::{CytoError, ProcessingMode, SimulationError, ValidationError};
use pretty_assertions::assert_eq;

fn seeded(seed: u64) -> ComparisonArgs {
    ComparisonArgs {
        seed: Some(seed),
        ..ComparisonArgs::default()
    }
}

#[test]
fn default_comparison_matches_schedule_shape() {
    let config = Config::default();
    let report = run_comparison(&config, &seeded(42)).unwrap();

    assert_eq!(report.schedule_summary.total_samples, 44);
    assert_eq!(report.schedule_summary.realtime_runs, 11);
    assert_eq!(
        report.batch_runs.iter().map(|r| r.sample_count).collect::<Vec<_>>(),
        vec![24, 20]
    );
    assert_eq!(report.batch_size, 20);

    for pop in &config.populations {
        assert_eq!(report.batch.get(&pop.id).map(<[f64]>::len), Some(2));
        assert_eq!(report.realtime.get(&pop.id).map(<[f64]>::len), Some(11));
    }
    // two rows per population, batch first
    assert_eq!(report.summaries.len(), 10);
    assert_eq!(report.summaries[0].mode, ProcessingMode::Batch);
    assert_eq!(report.summaries[1].mode, ProcessingMode::RealTime);
}

#[test]
fn seed_makes_runs_reproducible() {
    let config = Config::default();
    let a = run_comparison(&config, &seeded(7)).unwrap();
    let b = run_comparison(&config, &seeded(7)).unwrap();
    assert_eq!(a, b);

    let c = run_comparison(&config, &seeded(8)).unwrap();
    assert_ne!(a.realtime, c.realtime);
}

#[test]
fn custom_schedule_and_batch_size() {
    let args = ComparisonArgs {
        schedule_text: Some("1/10/2025: 9\n1/2/2025: 4\n1/5/2025: 5\n".into()),
        batch_size: Some(100),
        seed: Some(1),
        ..ComparisonArgs::default()
    };
    let report = run_comparison(&Config::default(), &args).unwrap();
    assert_eq!(report.batch_runs.len(), 1);
    assert_eq!(report.batch_runs[0].sample_count, 18);
    // sorted before deriving runs
    assert_eq!(
        report.realtime_runs.iter().map(|r| r.sample_count).collect::<Vec<_>>(),
        vec![4, 5, 9]
    );
}

#[test]
fn invalid_inputs_stop_before_simulation() {
    let config = Config::default();

    let bad_schedule = ComparisonArgs {
        schedule_text: Some("01/01/2025: 4\n01/01/2025".into()),
        ..ComparisonArgs::default()
    };
    assert!(matches!(
        run_comparison(&config, &bad_schedule),
        Err(CytoError::Validation(ValidationError::MalformedEntry { line: 2, .. }))
    ));

    let bad_cv = ComparisonArgs {
        realtime_cv: Some(0.0),
        ..ComparisonArgs::default()
    };
    assert!(matches!(
        run_comparison(&config, &bad_cv),
        Err(CytoError::Simulation(SimulationError::InvalidCvConfiguration { .. }))
    ));

    let bad_batch = ComparisonArgs {
        batch_size: Some(0),
        ..ComparisonArgs::default()
    };
    assert!(matches!(
        run_comparison(&config, &bad_batch),
        Err(CytoError::Simulation(SimulationError::InvalidBatchSize(_)))
    ));
}

#[test]
fn equal_cvs_scale_real_time_like_batch() {
    let args = ComparisonArgs {
        batch_cv: Some(6.0),
        realtime_cv: Some(6.0),
        seed: Some(3),
        ..ComparisonArgs::default()
    };
    let report = run_comparison(&Config::default(), &args).unwrap();
    assert_eq!(report.cv.realtime_scale(), 1.0);
}

#[test]
fn json_report_round_trips_through_disk() {
    let report = run_comparison(&Config::default(), &seeded(11)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    save_report(&report, &path).unwrap();
    let loaded = load_report(&path).unwrap();
    assert_eq!(loaded.schedule_summary, report.schedule_summary);
    assert_eq!(loaded.batch_runs, report.batch_runs);
    assert_eq!(loaded.summaries.len(), report.summaries.len());
}
