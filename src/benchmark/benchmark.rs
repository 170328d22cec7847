use std::time::Instant;

use crate::experiment::runner::ExperimentRunner;
use crate::simulation::params::Parameters;
use crate::simulation::run::Simulation;

/// Time the integrator plus per-step diagnostics for growing step counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_integrator() {
    println!("steps,total_ms,ns_per_step");

    for steps in [1_000, 10_000, 100_000, 1_000_000] {
        let params = Parameters { steps, ..Parameters::default() };

        // Warm up
        let _ = Simulation::from_seed(0, &Parameters { steps: 100, ..params.clone() }).run_to_completion();

        let t0 = Instant::now();
        let output = Simulation::from_seed(0, &params).run_to_completion();
        let elapsed = t0.elapsed().as_secs_f64();

        // keep the result alive so the loop is not optimized away
        assert_eq!(output.trajectory.len(), steps + 1);

        println!("{},{:.3},{:.1}", steps, elapsed * 1000.0, elapsed * 1e9 / steps as f64);
    }
}

/// Serial vs. rayon-parallel experiment wall time
pub fn bench_runner() {
    let params = Parameters::default();

    for num_seeds in [10, 20, 40] {
        let serial = ExperimentRunner::new(params.clone(), num_seeds);
        let parallel = ExperimentRunner::new(params.clone(), num_seeds).parallel(true);

        let t0 = Instant::now();
        let a = serial.run();
        let dt_serial = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        let b = parallel.run();
        let dt_parallel = t1.elapsed().as_secs_f64();

        let same = matches!((&a, &b), (Ok(a), Ok(b)) if a == b);
        println!(
            "seeds = {num_seeds:3}, serial = {:8.3} s, parallel = {:8.3} s, identical = {same}",
            dt_serial, dt_parallel
        );
    }
}
