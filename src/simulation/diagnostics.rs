//! Per-step scalar diagnostics
//!
//! - [`chaos_measure`]: velocity/separation cross products, a heuristic
//!   local-divergence proxy (not a Lyapunov exponent)
//! - [`ire_field`]: Gaussian coherence field around a query point, damped by
//!   the chaos measure

use crate::simulation::states::{NVec3, N_BODIES};

/// Chaos measure over the current positions and velocities.
///
/// With `r12 = r2 - r1`, `r13 = r3 - r1`, `r23 = r3 - r2`, sums
/// `|v x r| / (|r|^2 + eps)` for exactly five pairings:
/// `(v1, r12)`, `(v1, r13)`, `(v2, r23)`, `(v3, -r13)`, `(v3, -r23)`,
/// then multiplies by `scale`. `|v x r|` is the sum of the absolute cross
/// product components.
///
/// The pairing set is not symmetric (there is no `(v2, -r12)` term). Keep it.
pub fn chaos_measure(positions: &[NVec3; N_BODIES], velocities: &[NVec3; N_BODIES], eps: f64, scale: f64) -> f64 {
    let [r1, r2, r3] = positions;
    let [v1, v2, v3] = velocities;

    let r12 = r2 - r1;
    let r13 = r3 - r1;
    let r23 = r3 - r2;

    let terms: [(&NVec3, NVec3); 5] = [
        (v1, r12),
        (v1, r13),
        (v2, r23),
        (v3, -r13),
        (v3, -r23),
    ];

    let sum: f64 = terms
        .iter()
        .map(|(v, r)| cross_term(v, r, eps))
        .sum();

    scale * sum
}

// |v x r|_1 / (|r|^2 + eps)
fn cross_term(v: &NVec3, r: &NVec3, eps: f64) -> f64 {
    let c = v.cross(r);
    let denom = r.norm_squared() + eps;
    c.abs().sum() / denom
}

/// IRE coherence field at `query`.
///
/// `exp(-(sum_i |query - r_i|^2) / (2 sigma^2)) * exp(-c_t / 2)`
///
/// Lies in (0, 1] for finite inputs with `c_t >= 0`; exactly 1.0 when all
/// bodies sit on `query` and `c_t == 0`.
pub fn ire_field(positions: &[NVec3; N_BODIES], query: &NVec3, sigma: f64, c_t: f64) -> f64 {
    let dist_sum: f64 = positions
        .iter()
        .map(|r| (query - r).norm_squared())
        .sum();

    (-dist_sum / (2.0 * sigma * sigma)).exp() * (-c_t / 2.0).exp()
}
