pub mod simulation;
pub mod experiment;
pub mod report;
pub mod configuration;
pub mod benchmark;
pub mod error;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use simulation::states::{Body, System, NVec3, N_BODIES};
pub use simulation::params::Parameters;
pub use simulation::forces::{pairwise_acceleration, Acceleration, NewtonianGravity};
pub use simulation::diagnostics::{chaos_measure, ire_field};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::scenario::Scenario;
pub use simulation::run::{simulate, Diagnostic, DiagnosticSeries, RunOutput, Simulation, SimulationState, Trajectory};

pub use experiment::metrics::RunRecord;
pub use experiment::runner::{ExperimentRunner, RunCollection};

pub use report::{Reporter, render_table, plot_trajectory_xy};

pub use configuration::config::{DegeneratePolicy, ExperimentConfig, ParametersConfig, RunnerConfig};

pub use error::{ConfigError, ExperimentError};

pub use benchmark::benchmark::{bench_integrator, bench_runner};

#[cfg(feature = "viewer")]
pub use visualization::replay_vis2d::run_replay_2d;
