//! One seeded run of the integrator, with recording
//!
//! [`Simulation`] is a small state machine
//! (`Initialized -> Stepping -> Completed`) that advances a [`Scenario`]
//! exactly `steps` times. Each step appends the new positions to the
//! [`Trajectory`] and the chaos measure / IRE value pair to the
//! [`DiagnosticSeries`]. Nothing is written anywhere but memory.

use crate::simulation::diagnostics::{chaos_measure, ire_field};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{System, NVec3, N_BODIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Initialized,
    Stepping,
    Completed,
}

/// Position snapshots of all bodies, initial condition included
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    snapshots: Vec<[NVec3; N_BODIES]>,
}

impl Trajectory {
    fn with_capacity(n: usize) -> Self {
        Self { snapshots: Vec::with_capacity(n) }
    }

    fn push(&mut self, positions: [NVec3; N_BODIES]) {
        self.snapshots.push(positions);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[[NVec3; N_BODIES]] {
        &self.snapshots
    }

    /// Positions of a single body over time
    ///
    /// # Panics
    /// If `i >= N_BODIES`.
    pub fn body(&self, i: usize) -> impl Iterator<Item = NVec3> + '_ {
        assert!(i < N_BODIES, "body index {i} out of range, system has {N_BODIES} bodies");
        self.snapshots.iter().map(move |s| s[i])
    }

    /// XY projection of a single body's path
    pub fn body_xy(&self, i: usize) -> Vec<(f64, f64)> {
        self.body(i).map(|x| (x.x, x.y)).collect()
    }
}

/// Diagnostics recorded after one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostic {
    pub chaos: f64, // chaos measure C_t
    pub coherence: f64, // IRE field at the centroid
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticSeries {
    entries: Vec<Diagnostic>,
}

impl DiagnosticSeries {
    fn with_capacity(n: usize) -> Self {
        Self { entries: Vec::with_capacity(n) }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn chaos(&self) -> Vec<f64> {
        self.entries.iter().map(|d| d.chaos).collect()
    }

    pub fn coherence(&self) -> Vec<f64> {
        self.entries.iter().map(|d| d.coherence).collect()
    }
}

/// Everything a completed run leaves behind
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub seed: u64,
    pub system: System,
    pub trajectory: Trajectory,
    pub diagnostics: DiagnosticSeries,
}

pub struct Simulation {
    scenario: Scenario,
    trajectory: Trajectory,
    diagnostics: DiagnosticSeries,
    steps_taken: usize,
    state: SimulationState,
}

impl Simulation {
    pub fn new(scenario: Scenario) -> Self {
        let steps = scenario.parameters.steps;
        let mut trajectory = Trajectory::with_capacity(steps + 1);
        trajectory.push(scenario.system.positions());

        Self {
            scenario,
            trajectory,
            diagnostics: DiagnosticSeries::with_capacity(steps),
            steps_taken: 0,
            state: SimulationState::Initialized,
        }
    }

    pub fn from_seed(seed: u64, parameters: &Parameters) -> Self {
        Self::new(Scenario::from_seed(seed, parameters))
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn system(&self) -> &System {
        &self.scenario.system
    }

    /// Perform one transition. Does nothing once `Completed`.
    pub fn step(&mut self) -> SimulationState {
        if self.steps_taken >= self.scenario.parameters.steps {
            self.state = SimulationState::Completed;
            return self.state;
        }

        let Scenario { system, parameters, forces, .. } = &mut self.scenario;

        semi_implicit_euler(system, &*forces, parameters);

        let positions = system.positions();
        self.trajectory.push(positions);

        let chaos = chaos_measure(&positions, &system.velocities(), parameters.eps, parameters.chaos_scale);
        let coherence = ire_field(&positions, &system.centroid(), parameters.sigma, chaos);
        self.diagnostics.entries.push(Diagnostic { chaos, coherence });

        self.steps_taken += 1;
        self.state = if self.steps_taken == parameters.steps {
            SimulationState::Completed
        } else {
            SimulationState::Stepping
        };
        self.state
    }

    /// Step until `Completed` and hand over the recordings
    pub fn run_to_completion(mut self) -> RunOutput {
        while self.step() != SimulationState::Completed {}

        RunOutput {
            seed: self.scenario.seed,
            system: self.scenario.system,
            trajectory: self.trajectory,
            diagnostics: self.diagnostics,
        }
    }
}

/// Integrate one seeded run start to finish
pub fn simulate(seed: u64, parameters: &Parameters) -> RunOutput {
    Simulation::from_seed(seed, parameters).run_to_completion()
}
