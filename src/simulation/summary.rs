use serde::{Deserialize, Serialize};

use super::simulator::SimulationResult;
use crate::types::cytometry::{CellPopulation, ProcessingMode};

/// Descriptive statistics for one population under one processing mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PopulationSummary {
    pub population_id: String,
    pub mode: ProcessingMode,
    pub mean: Option<f64>,
    /// Signed deviation of the mean from the true value, in percent.
    pub deviation_pct: Option<f64>,
    /// Sample CV in percent (population standard deviation over the mean).
    pub cv_pct: Option<f64>,
    pub runs: usize,
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation with divisor `n`, not `n - 1`.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    if m == 0.0 {
        return None;
    }
    population_std_dev(values).map(|sd| sd / m * 100.0)
}

pub fn summarize_population(population: &CellPopulation, mode: ProcessingMode, values: &[f64]) -> PopulationSummary {
    let m = mean(values);
    PopulationSummary {
        population_id: population.id.clone(),
        mode,
        mean: m,
        deviation_pct: m.map(|m| (m - population.true_value) / population.true_value * 100.0),
        cv_pct: coefficient_of_variation(values),
        runs: values.len(),
    }
}

/// Builds the comparison rows in population order, batch before real-time.
/// Populations missing from a result are summarized as having no runs.
pub fn summarize(
    populations: &[CellPopulation],
    batch: &SimulationResult,
    realtime: &SimulationResult,
) -> Vec<PopulationSummary> {
    let mut rows = Vec::with_capacity(populations.len() * 2);
    for population in populations {
        for (mode, result) in [(ProcessingMode::Batch, batch), (ProcessingMode::RealTime, realtime)] {
            let values = result.get(&population.id).unwrap_or(&[]);
            rows.push(summarize_population(population, mode, values));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn basic_statistics() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(close(mean(&values), 5.0));
        assert!(close(population_std_dev(&values), 2.0));
        assert!(close(coefficient_of_variation(&values), 40.0));
    }

    #[test]
    fn empty_values_have_no_statistics() {
        assert_eq!(mean(&[]), None);
        assert_eq!(population_std_dev(&[]), None);
        assert_eq!(coefficient_of_variation(&[]), None);
        assert_eq!(coefficient_of_variation(&[1.0, -1.0]), None);
    }

    #[test]
    fn deviation_is_signed_percent_of_true_value() {
        let pop = CellPopulation::new("CD19+", "B cells", 8.0, 9.4);
        let row = summarize_population(&pop, ProcessingMode::Batch, &[7.0, 8.0]);
        assert!(close(row.deviation_pct, -6.25));
        assert_eq!(row.runs, 2);
    }

    #[test]
    fn rows_are_ordered_by_population_then_mode() {
        let pops = [
            CellPopulation::new("b", "B", 1.0, 1.0),
            CellPopulation::new("a", "A", 1.0, 1.0),
        ];
        let mut values = BTreeMap::new();
        values.insert("a".to_string(), vec![1.0]);
        values.insert("b".to_string(), vec![1.0, 1.0]);
        let batch = SimulationResult { mode: ProcessingMode::Batch, values };
        let realtime = SimulationResult::new(ProcessingMode::RealTime);

        let rows = summarize(&pops, &batch, &realtime);
        let keys: Vec<(&str, ProcessingMode, usize)> = rows
            .iter()
            .map(|r| (r.population_id.as_str(), r.mode, r.runs))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("b", ProcessingMode::Batch, 2),
                ("b", ProcessingMode::RealTime, 0),
                ("a", ProcessingMode::Batch, 1),
                ("a", ProcessingMode::RealTime, 0),
            ]
        );
        assert_eq!(rows[1].mean, None);
    }
}
