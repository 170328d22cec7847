//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds validated runtime settings:
//! - fixed step size and step count,
//! - gravitational constant and body masses,
//! - softening added to pair distances (`eps`),
//! - sampling ranges for the seeded initial conditions,
//! - diagnostic constants (`sigma`, `chaos_scale`)

use crate::simulation::states::N_BODIES;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub masses: [f64; N_BODIES], // body masses, constant for a run
    pub dt: f64, // fixed step size
    pub steps: usize, // number of steps per run
    pub eps: f64, // softening added to the raw pair distance
    pub sigma: f64, // IRE field width
    pub chaos_scale: f64, // scale applied to the summed chaos terms
    pub position_range: f64, // initial positions in [-r, r) per axis
    pub velocity_range: f64, // initial velocities in [-r, r) per axis
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 1.0,
            masses: [1.0; N_BODIES],
            dt: 0.001,
            steps: 10_000,
            eps: 1e-9,
            sigma: 0.5,
            chaos_scale: 0.2,
            position_range: 1.0,
            velocity_range: 0.1,
        }
    }
}
