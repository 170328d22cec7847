//! Configuration types for loading experiments from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of an
//! experiment. Every field has a default, so an empty file (or no file at
//! all) describes the reference experiment.
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 1.0                  # gravitational constant
//!   masses: [1.0, 1.0, 1.0] # one mass per body
//!   dt: 0.001               # fixed step size
//!   steps: 10000            # steps per run
//!   softening: 1.0e-9       # added to |r| before cubing
//!   sigma: 0.5              # IRE field width
//!   chaos_scale: 0.2        # chaos measure scale
//!   position_range: 1.0     # initial positions in [-1, 1)
//!   velocity_range: 0.1     # initial velocities in [-0.1, 0.1)
//!
//! experiment:
//!   num_seeds: 10           # seeds 0..num_seeds
//!   parallel: false         # run seeds on the rayon pool
//!   degenerate_policy: "propagate"   # or "reject"
//! ```
//!
//! [`ExperimentConfig::validate`] maps this into the runtime [`Parameters`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::params::Parameters;
use crate::simulation::states::N_BODIES;

/// What to do with a run whose mean chaos measure is zero
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    #[serde(rename = "propagate")] // keep the non-finite stability value and warn
    #[default]
    Propagate,

    #[serde(rename = "reject")] // fail the experiment with `DegenerateRun`
    Reject,
}

/// Physical and numerical parameters
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,
    pub masses: [f64; N_BODIES],
    pub dt: f64,
    pub steps: usize,
    pub softening: f64,
    pub sigma: f64,
    pub chaos_scale: f64,
    pub position_range: f64,
    pub velocity_range: f64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            G: p.G,
            masses: p.masses,
            dt: p.dt,
            steps: p.steps,
            softening: p.eps,
            sigma: p.sigma,
            chaos_scale: p.chaos_scale,
            position_range: p.position_range,
            velocity_range: p.velocity_range,
        }
    }
}

/// How the seed loop is driven
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RunnerConfig {
    pub num_seeds: u64,
    pub parallel: bool,
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            num_seeds: 10,
            parallel: false,
            degenerate_policy: DegeneratePolicy::Propagate,
        }
    }
}

/// Top-level experiment configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ExperimentConfig {
    pub parameters: ParametersConfig,
    pub experiment: RunnerConfig,
}

impl ExperimentConfig {
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(s).map_err(|source| ConfigError::Yaml {
            path: "<inline>".into(),
            source,
        })
    }

    /// Check invariants and build runtime `Parameters`
    pub fn validate(&self) -> Result<Parameters, ConfigError> {
        let p = &self.parameters;

        if !p.G.is_finite() {
            return Err(invalid("G", format!("must be finite, got {}", p.G)));
        }
        for m in p.masses {
            if !(m > 0.0 && m.is_finite()) {
                return Err(invalid("masses", format!("every mass must be positive and finite, got {m}")));
            }
        }
        if !(p.dt > 0.0 && p.dt.is_finite()) {
            return Err(invalid("dt", format!("must be positive and finite, got {}", p.dt)));
        }
        if !(p.softening > 0.0 && p.softening.is_finite()) {
            return Err(invalid("softening", format!("must be positive and finite, got {}", p.softening)));
        }
        if !(p.sigma > 0.0 && p.sigma.is_finite()) {
            return Err(invalid("sigma", format!("must be positive and finite, got {}", p.sigma)));
        }
        if !(p.chaos_scale >= 0.0 && p.chaos_scale.is_finite()) {
            return Err(invalid("chaos_scale", format!("must be non-negative and finite, got {}", p.chaos_scale)));
        }
        if !(p.position_range >= 0.0 && p.position_range.is_finite()) {
            return Err(invalid("position_range", format!("must be non-negative, got {}", p.position_range)));
        }
        if !(p.velocity_range >= 0.0 && p.velocity_range.is_finite()) {
            return Err(invalid("velocity_range", format!("must be non-negative, got {}", p.velocity_range)));
        }

        Ok(Parameters {
            G: p.G,
            masses: p.masses,
            dt: p.dt,
            steps: p.steps,
            eps: p.softening,
            sigma: p.sigma,
            chaos_scale: p.chaos_scale,
            position_range: p.position_range,
            velocity_range: p.velocity_range,
        })
    }
}

fn invalid(name: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidParameter { name, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_reference_defaults() {
        let cfg = ExperimentConfig::from_yaml_str("{}").unwrap();
        let p = cfg.validate().unwrap();

        assert_eq!(p, Parameters::default());
        assert_eq!(cfg.experiment.num_seeds, 10);
        assert!(!cfg.experiment.parallel);
        assert_eq!(cfg.experiment.degenerate_policy, DegeneratePolicy::Propagate);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "parameters:\n  steps: 50\n  G: 0.5\nexperiment:\n  degenerate_policy: \"reject\"\n";
        let cfg = ExperimentConfig::from_yaml_str(yaml).unwrap();
        let p = cfg.validate().unwrap();

        assert_eq!(p.steps, 50);
        assert_eq!(p.G, 0.5);
        assert_eq!(p.dt, 0.001);
        assert_eq!(cfg.experiment.degenerate_policy, DegeneratePolicy::Reject);
    }

    #[test]
    fn rejects_non_positive_mass() {
        let mut cfg = ExperimentConfig::default();
        cfg.parameters.masses = [1.0, 0.0, 1.0];

        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "masses", .. }));
    }

    #[test]
    fn rejects_zero_softening() {
        let mut cfg = ExperimentConfig::default();
        cfg.parameters.softening = 0.0;

        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "softening", .. }));
    }

    #[test]
    fn rejects_negative_chaos_scale() {
        let mut cfg = ExperimentConfig::default();
        cfg.parameters.chaos_scale = -1.0;

        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "chaos_scale", .. }));

        cfg.parameters.chaos_scale = f64::NAN;
        assert!(cfg.validate().is_err());

        cfg.parameters.chaos_scale = 0.0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bundled_scenario_parses() {
        let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("scenarios")
            .join("reference.yaml");
        let cfg = ExperimentConfig::from_yaml_file(&path).unwrap();

        assert_eq!(cfg.validate().unwrap(), Parameters::default());
    }
}
