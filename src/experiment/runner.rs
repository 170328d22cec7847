//! Experiment runner: one integrator pass per seed in `0..num_seeds`
//!
//! Each seed gets its own scenario and generator; runs share nothing, so the
//! seed loop is optionally fanned out over the rayon pool. The collection is
//! always in seed-ascending order.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::configuration::config::{DegeneratePolicy, ExperimentConfig};
use crate::error::ExperimentError;
use crate::experiment::metrics::RunRecord;
use crate::simulation::params::Parameters;
use crate::simulation::run::simulate;

/// Ordered per-seed records, read-only once built
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunCollection {
    records: Vec<RunRecord>,
}

impl RunCollection {
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first record with the greatest finite chaos-stability percentage
    pub fn most_chaotic(&self) -> Option<&RunRecord> {
        self.records
            .iter()
            .filter(|r| r.chaos_stability.is_finite())
            .fold(None, |best: Option<&RunRecord>, r| match best {
                Some(b) if b.chaos_stability >= r.chaos_stability => Some(b),
                _ => Some(r),
            })
    }
}

impl FromIterator<RunRecord> for RunCollection {
    fn from_iter<I: IntoIterator<Item = RunRecord>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

pub struct ExperimentRunner {
    pub parameters: Parameters,
    pub num_seeds: u64,
    pub parallel: bool,
    pub policy: DegeneratePolicy,
}

impl ExperimentRunner {
    pub fn new(parameters: Parameters, num_seeds: u64) -> Self {
        Self {
            parameters,
            num_seeds,
            parallel: false,
            policy: DegeneratePolicy::Propagate,
        }
    }

    pub fn from_config(cfg: &ExperimentConfig) -> Result<Self, ExperimentError> {
        let parameters = cfg.validate()?;
        Ok(Self {
            parameters,
            num_seeds: cfg.experiment.num_seeds,
            parallel: cfg.experiment.parallel,
            policy: cfg.experiment.degenerate_policy,
        })
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Simulate every seed and collect the records
    pub fn run(&self) -> Result<RunCollection, ExperimentError> {
        info!(
            num_seeds = self.num_seeds,
            steps = self.parameters.steps,
            dt = self.parameters.dt,
            parallel = self.parallel,
            "starting experiment"
        );

        let records: Result<Vec<RunRecord>, ExperimentError> = if self.parallel {
            (0..self.num_seeds)
                .into_par_iter()
                .map(|seed| self.run_seed(seed))
                .collect()
        } else {
            (0..self.num_seeds).map(|seed| self.run_seed(seed)).collect()
        };

        let collection: RunCollection = records?.into_iter().collect();
        info!(runs = collection.len(), "experiment finished");
        Ok(collection)
    }

    /// Simulate a single seed; the trajectory is dropped once summarized
    pub fn run_seed(&self, seed: u64) -> Result<RunRecord, ExperimentError> {
        let output = simulate(seed, &self.parameters);
        let record = RunRecord::from_output(&output);

        debug!(
            seed,
            mse = record.mse,
            chaos_stability = record.chaos_stability,
            final_coherence = record.final_coherence,
            mean_coherence = record.mean_coherence,
            prediction_accuracy = record.prediction_accuracy,
            "run complete"
        );

        // zero mean or no samples; divergence (NaN/inf) is not degenerate
        let degenerate = output.diagnostics.is_empty() || record.mean_chaos == 0.0;

        if degenerate {
            match self.policy {
                DegeneratePolicy::Reject => {
                    return Err(ExperimentError::DegenerateRun {
                        seed,
                        mean: record.mean_chaos,
                    });
                }
                DegeneratePolicy::Propagate => {
                    warn!(seed, mean_chaos = record.mean_chaos, "degenerate run, chaos stability is not finite");
                }
            }
        } else if !record.is_finite() {
            warn!(seed, "run produced non-finite metrics");
        }

        Ok(record)
    }
}
