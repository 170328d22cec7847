//! Reporting on a finished experiment
//!
//! Prints the run table and re-simulates the most chaotic seed to plot its
//! trajectory. Trajectories are never cached; the seed is enough.

pub mod plot;
pub mod table;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::ExperimentError;
use crate::experiment::runner::RunCollection;
use crate::simulation::params::Parameters;
use crate::simulation::run::{simulate, RunOutput};

pub use plot::plot_trajectory_xy;
pub use table::render_table;

pub struct Reporter {
    pub parameters: Parameters,
    pub plot_path: Option<PathBuf>, // None = table only
}

impl Reporter {
    pub fn new(parameters: Parameters, plot_path: Option<PathBuf>) -> Self {
        Self { parameters, plot_path }
    }

    /// Re-run the most chaotic seed from scratch
    pub fn replay_most_chaotic(&self, runs: &RunCollection) -> Option<RunOutput> {
        let worst = runs.most_chaotic()?;
        Some(simulate(worst.seed, &self.parameters))
    }

    pub fn report(&self, runs: &RunCollection) -> Result<(), ExperimentError> {
        println!("{}", render_table(runs));

        let Some(path) = &self.plot_path else {
            return Ok(());
        };

        let Some(output) = self.replay_most_chaotic(runs) else {
            warn!("no run has a finite chaos stability; skipping plot");
            return Ok(());
        };

        plot_trajectory_xy(&output.trajectory, output.seed, path)?;
        info!(seed = output.seed, path = %path.display(), "wrote trajectory plot");
        Ok(())
    }
}
