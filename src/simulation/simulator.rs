//*** START FILE: src/simulation/simulator.rs ***//
use std::collections::BTreeMap;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SimulationError;
use crate::types::cytometry::{check_positive_cv, CellPopulation, CvConfiguration, ProcessingMode, ProcessingRun};

/// Simulated measurements for one processing mode, keyed by population id.
/// Each sequence has one value per run, in run order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub mode: ProcessingMode,
    pub values: BTreeMap<String, Vec<f64>>,
}

impl SimulationResult {
    pub fn new(mode: ProcessingMode) -> Self {
        Self {
            mode,
            values: BTreeMap::new(),
        }
    }

    pub fn get(&self, population_id: &str) -> Option<&[f64]> {
        self.values.get(population_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Draws synthetic measurements with CVs rescaled to the configured values.
///
/// A population's baseline CV is the batch CV it shows when the instrument
/// runs at `reference_batch_cv`. Configuring a different batch CV rescales
/// every population by the same ratio, and real-time CVs are the batch ones
/// times `realtime_cv / batch_cv`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    cv: CvConfiguration,
    reference_batch_cv: f64,
    realtime_scale: f64,
}

impl Simulator {
    pub fn configure(cv: CvConfiguration, reference_batch_cv: f64) -> Result<Self, SimulationError> {
        cv.validate()?;
        check_positive_cv("reference_batch_cv", reference_batch_cv)?;
        Ok(Self {
            cv,
            reference_batch_cv,
            realtime_scale: cv.realtime_scale(),
        })
    }

    pub fn cv(&self) -> CvConfiguration {
        self.cv
    }

    pub fn realtime_scale(&self) -> f64 {
        self.realtime_scale
    }

    /// CV in percent that `population` exhibits under `mode`.
    pub fn effective_cv(&self, population: &CellPopulation, mode: ProcessingMode) -> f64 {
        let batch_cv = population.baseline_cv * (self.cv.batch_cv / self.reference_batch_cv);
        match mode {
            ProcessingMode::Batch => batch_cv,
            ProcessingMode::RealTime => batch_cv * self.realtime_scale,
        }
    }

    /// One normal draw per run per population. Only the number and order of
    /// runs matter; sample counts do not change the draw. Values are not
    /// clamped and may leave the 0..=100 % range. Population ids must be
    /// unique; a repeated id is rejected rather than overwriting results.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        runs: &[ProcessingRun],
        populations: &[CellPopulation],
        mode: ProcessingMode,
        rng: &mut R,
    ) -> Result<SimulationResult, SimulationError> {
        let mut result = SimulationResult::new(mode);

        for population in populations {
            if result.values.contains_key(&population.id) {
                return Err(SimulationError::DuplicatePopulation(population.id.clone()));
            }
            let effective_cv = self.effective_cv(population, mode);
            let std_dev = population.true_value * effective_cv / 100.0;
            let normal = Normal::new(population.true_value, std_dev).map_err(|e| {
                SimulationError::InvalidDistribution {
                    population: population.id.clone(),
                    reason: e.to_string(),
                }
            })?;

            let draws: Vec<f64> = runs.iter().map(|_| normal.sample(rng)).collect();

            let out_of_range = draws.iter().filter(|v| !(0.0..=100.0).contains(*v)).count();
            if out_of_range > 0 {
                warn!(
                    population = %population.id,
                    %mode,
                    out_of_range,
                    "simulated frequencies outside 0-100%"
                );
            }

            result.values.insert(population.id.clone(), draws);
        }

        info!(%mode, runs = runs.len(), populations = populations.len(), "simulation complete");
        Ok(result)
    }
}

//*** END FILE: src/simulation/simulator.rs ***//
