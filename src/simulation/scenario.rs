//! Build fully-initialized simulation scenarios from a seed
//!
//! Takes validated `Parameters` and a run seed and produces the runtime
//! bundle (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with randomized bodies at t = 0)
//! - active force law (`NewtonianGravity`)
//!
//! Every scenario owns its own seeded generator, so two scenarios built
//! from the same seed and parameters start from identical states.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System, NVec3, N_BODIES};
use crate::simulation::forces::NewtonianGravity;

/// Runtime bundle for one seeded run
pub struct Scenario {
    pub seed: u64,
    pub parameters: Parameters,
    pub system: System,
    pub forces: NewtonianGravity,
}

impl Scenario {
    pub fn from_seed(seed: u64, parameters: &Parameters) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let system = sample_system(&mut rng, parameters);

        let forces = NewtonianGravity {
            G: parameters.G,
            eps: parameters.eps,
        };

        Self {
            seed,
            parameters: parameters.clone(),
            system,
            forces,
        }
    }
}

/// Draw initial conditions from `rng`
///
/// Draw order: positions of bodies 1, 2, 3, then velocities of bodies 1, 2, 3,
/// each component uniform in `[-range, range)`.
pub fn sample_system<R: Rng>(rng: &mut R, parameters: &Parameters) -> System {
    let mut positions = [NVec3::zeros(); N_BODIES];
    for x in positions.iter_mut() {
        *x = uniform_vec3(rng, parameters.position_range);
    }

    let mut velocities = [NVec3::zeros(); N_BODIES];
    for v in velocities.iter_mut() {
        *v = uniform_vec3(rng, parameters.velocity_range);
    }

    let bodies = std::array::from_fn(|i| Body {
        x: positions[i],
        v: velocities[i],
        m: parameters.masses[i],
    });

    System { bodies, t: 0.0 }
}

fn uniform_vec3<R: Rng>(rng: &mut R, half_width: f64) -> NVec3 {
    NVec3::from_fn(|_, _| uniform(rng, half_width))
}

// empty range would panic in random_range
fn uniform<R: Rng>(rng: &mut R, half_width: f64) -> f64 {
    if half_width == 0.0 {
        return 0.0;
    }
    rng.random_range(-half_width..half_width)
}
