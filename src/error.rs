//! Error types for configuration loading and experiment execution.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("failed to read scenario file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario file {path}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExperimentError {
    /// The run's chaos series is empty or averages to exactly zero, so the
    /// chaos-stability percentage has no finite value.
    #[error("run with seed {seed} is degenerate: mean chaos measure is {mean}")]
    DegenerateRun { seed: u64, mean: f64 },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to draw trajectory plot: {0}")]
    Plot(String),
}
