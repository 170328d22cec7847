//! Core state types for the three-body simulation.
//!
//! Defines the body/system structs used by the integrator:
//! - `Body`   using `NVec3` (position, velocity) and a fixed mass
//! - `System` holding exactly three bodies and the current time `t`
//!
//! Bodies are mutated in place every step; masses never change during a run.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Number of bodies in every system.
pub const N_BODIES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // 3d position
    pub v: NVec3, // 3d velocity
    pub m: f64, // mass
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: [Body; N_BODIES], // the three bodies
    pub t: f64, // time
}

impl System {
    /// Snapshot of the three current positions
    pub fn positions(&self) -> [NVec3; N_BODIES] {
        [self.bodies[0].x, self.bodies[1].x, self.bodies[2].x]
    }

    /// Snapshot of the three current velocities
    pub fn velocities(&self) -> [NVec3; N_BODIES] {
        [self.bodies[0].v, self.bodies[1].v, self.bodies[2].v]
    }

    /// Arithmetic mean of the positions (unweighted by mass)
    pub fn centroid(&self) -> NVec3 {
        let [r1, r2, r3] = self.positions();
        (r1 + r2 + r3) / 3.0
    }
}
