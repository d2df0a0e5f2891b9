//*** START FILE: src/report.rs ***//
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::simulation::{PopulationSummary, ScheduleSummary, SimulationResult};
use crate::types::cytometry::{CellPopulation, CvConfiguration, ProcessingRun};

/// Everything one comparison produced: inputs, both run sequences, raw
/// simulated values and the summary rows. Serialized as the JSON export.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub schedule_summary: ScheduleSummary,
    pub batch_size: u64,
    pub cv: CvConfiguration,
    pub seed: Option<u64>,
    pub populations: Vec<CellPopulation>,
    pub batch_runs: Vec<ProcessingRun>,
    pub realtime_runs: Vec<ProcessingRun>,
    pub batch: SimulationResult,
    pub realtime: SimulationResult,
    pub summaries: Vec<PopulationSummary>,
}

fn fmt_opt(value: Option<f64>, signed: bool) -> String {
    match (value, signed) {
        (Some(v), true) => format!("{v:+.2}"),
        (Some(v), false) => format!("{v:.2}"),
        (None, _) => "-".to_string(),
    }
}

impl ComparisonReport {
    pub fn render_schedule_summary(&self) -> String {
        format!(
            "Total Samples: {}\nBatch Mode Runs: {}\nReal-Time Mode Runs: {}\n",
            self.schedule_summary.total_samples, self.schedule_summary.batch_runs, self.schedule_summary.realtime_runs
        )
    }

    /// Plain-text summary table, one row per population and mode.
    pub fn render_table(&self) -> String {
        let header = ["Population", "Mode", "Mean (%)", "Deviation (%)", "CV (%)", "Runs"];
        let rows: Vec<[String; 6]> = self
            .summaries
            .iter()
            .map(|s| {
                [
                    s.population_id.clone(),
                    s.mode.to_string(),
                    fmt_opt(s.mean, false),
                    fmt_opt(s.deviation_pct, true),
                    fmt_opt(s.cv_pct, false),
                    s.runs.to_string(),
                ]
            })
            .collect();

        let mut widths = header.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        let mut out = String::new();
        let mut push_row = |cells: &[&str]| {
            let line: Vec<String> = cells
                .iter()
                .zip(widths)
                .enumerate()
                // first two columns are labels, the rest are numbers
                .map(|(i, (cell, w))| if i < 2 { format!("{cell:<w$}") } else { format!("{cell:>w$}") })
                .collect();
            let _ = writeln!(out, "{}", line.join("  ").trim_end());
        };

        push_row(&header);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_row(&rule.iter().map(String::as_str).collect::<Vec<_>>());
        for row in &rows {
            push_row(&row.iter().map(String::as_str).collect::<Vec<_>>());
        }
        out
    }

    pub fn render_runs(runs: &[ProcessingRun]) -> String {
        let mut out = String::new();
        for run in runs {
            let _ = writeln!(
                out,
                "{}  samples={:<4} accumulated={}",
                run.date.format(crate::parsing::DATE_FORMAT),
                run.sample_count,
                run.accumulated_count
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cytometry::ProcessingMode;
    use chrono::NaiveDate;

    fn report() -> ComparisonReport {
        ComparisonReport {
            schedule_summary: ScheduleSummary { total_samples: 44, batch_runs: 2, realtime_runs: 11 },
            batch_size: 20,
            cv: CvConfiguration { batch_cv: 4.56, realtime_cv: 7.21 },
            seed: Some(1),
            populations: vec![],
            batch_runs: vec![],
            realtime_runs: vec![],
            batch: SimulationResult::new(ProcessingMode::Batch),
            realtime: SimulationResult::new(ProcessingMode::RealTime),
            summaries: vec![
                PopulationSummary {
                    population_id: "CD3+".into(),
                    mode: ProcessingMode::Batch,
                    mean: Some(45.123),
                    deviation_pct: Some(0.2733),
                    cv_pct: Some(0.41),
                    runs: 2,
                },
                PopulationSummary {
                    population_id: "CD3+".into(),
                    mode: ProcessingMode::RealTime,
                    mean: None,
                    deviation_pct: None,
                    cv_pct: None,
                    runs: 0,
                },
            ],
        }
    }

    #[test]
    fn table_formats_numbers_like_the_dashboard() {
        let table = report().render_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Population"));
        assert!(lines[2].contains("45.12"));
        assert!(lines[2].contains("+0.27"));
        assert!(lines[2].contains("0.41"));
        assert!(lines[3].contains("Real-Time"));
        assert!(lines[3].contains('-'));
    }

    #[test]
    fn schedule_summary_lists_counts() {
        let text = report().render_schedule_summary();
        assert!(text.contains("Total Samples: 44"));
        assert!(text.contains("Batch Mode Runs: 2"));
        assert!(text.contains("Real-Time Mode Runs: 11"));
    }

    #[test]
    fn runs_render_one_line_each() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 21).unwrap();
        let runs = [ProcessingRun { date, sample_count: 24, accumulated_count: 24 }];
        let text = ComparisonReport::render_runs(&runs);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("01/21/2025"));
    }
}
//*** END FILE: src/report.rs ***//
