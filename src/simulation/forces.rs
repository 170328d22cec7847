//! Force / acceleration contributors for the three-body engine
//!
//! Defines the softened pairwise force law, the acceleration trait the
//! integrator is generic over, and direct Newtonian gravity over all
//! ordered pairs

use crate::simulation::states::{System, NVec3, N_BODIES};

/// Acceleration imparted on `target` by a point mass `m` sitting at `source`
///
/// `a = G * m * (source - target) / (|source - target| + eps)^3`
///
/// The softening `eps` is added to the raw distance before cubing, not to the
/// squared distance. With `eps > 0` the result is always finite, even for
/// coincident points (it is then exactly zero).
#[allow(non_snake_case)]
pub fn pairwise_acceleration(source: &NVec3, target: &NVec3, m: f64, G: f64, eps: f64) -> NVec3 {
    let r = source - target;
    let dist = r.norm() + eps;
    r * (G * m) / dist.powi(3)
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);

    /// Total acceleration per body at time `t`, starting from zero
    fn accelerations(&self, t: f64, sys: &System) -> [NVec3; N_BODIES] {
        let mut out = [NVec3::zeros(); N_BODIES];
        self.acceleration(t, sys, &mut out);
        out
    }
}

/// Newtonian gravity with distance softening
/// Evaluates every ordered pair (i, j), i != j, through
/// [`pairwise_acceleration`]; no symmetric shortcut so each contribution is
/// the same expression the pair law gives
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps: f64, // softening added to |r|
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        // Target body i, ordered source bodies j in index order,
        // e.g. body 0 receives F(1 -> 0) + F(2 -> 0)
        for (i, target) in sys.bodies.iter().enumerate() {
            for (j, source) in sys.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                out[i] += pairwise_acceleration(&source.x, &target.x, source.m, self.G, self.eps);
            }
        }
    }
}
