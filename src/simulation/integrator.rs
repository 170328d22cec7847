//! Fixed-step time integrator for the three-body system
//!
//! Semi-implicit (symplectic) Euler driven by any `Acceleration` and `Parameters`:
//! a kick with accelerations from the old positions, then a drift with the
//! freshly kicked velocities

use super::states::System;
use super::forces::Acceleration;
use super::params::Parameters;

/// Advance the system by one step using semi-implicit Euler
/// Uses one force evaluation per step and updates velocities, positions,
/// and `sys.t` in-place with fixed step `dt = params.dt`
pub fn semi_implicit_euler<A: Acceleration>(sys: &mut System, forces: &A, params: &Parameters) {
    let dt = params.dt;

    // a_n from x_n at time t_n, for all bodies before anything moves
    let a = forces.accelerations(sys.t, &*sys);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(a.iter()) {
        b.v += *a * dt;
    }

    // Drift with the new velocity: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += b.v * dt;
    }

    sys.t += dt;
}
