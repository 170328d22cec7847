use tbsim::{ExperimentConfig, ExperimentRunner, Reporter};
use tbsim::{bench_integrator, bench_runner};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Seeded three-body experiments with chaos and IRE diagnostics")]
struct Args {
    /// Scenario file under `scenarios/`; defaults apply when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Override steps per run
    #[arg(long)]
    steps: Option<usize>,

    /// Override the number of seeds
    #[arg(long)]
    seeds: Option<u64>,

    /// Run seeds on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Where to write the most chaotic run's XY plot
    #[arg(long, default_value = "most_chaotic.svg")]
    plot: PathBuf,

    /// Print the table only
    #[arg(long)]
    no_plot: bool,

    /// Run throughput benchmarks instead of the experiment
    #[arg(long)]
    bench: bool,

    /// Replay the most chaotic run in a window
    #[cfg(feature = "viewer")]
    #[arg(long)]
    view: bool,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<ExperimentConfig> {
    let mut cfg = match &args.file_name {
        Some(file_name) => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
            ExperimentConfig::from_yaml_file(&config_path)
                .with_context(|| format!("failed to load scenario {file_name}"))?
        }
        None => ExperimentConfig::default(),
    };

    if let Some(steps) = args.steps {
        cfg.parameters.steps = steps;
    }
    if let Some(seeds) = args.seeds {
        cfg.experiment.num_seeds = seeds;
    }
    if args.parallel {
        cfg.experiment.parallel = true;
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_integrator();
        bench_runner();
        return Ok(());
    }

    let cfg = load_config(&args)?;
    let runner = ExperimentRunner::from_config(&cfg)?;
    let runs = runner.run()?;

    let plot_path = (!args.no_plot).then(|| args.plot.clone());
    let reporter = Reporter::new(runner.parameters.clone(), plot_path);
    reporter.report(&runs)?;

    view(&args, &reporter, &runs);

    Ok(())
}

#[cfg(feature = "viewer")]
fn view(args: &Args, reporter: &Reporter, runs: &tbsim::RunCollection) {
    if !args.view {
        return;
    }
    if let Some(output) = reporter.replay_most_chaotic(runs) {
        tbsim::run_replay_2d(&output.trajectory, 10);
    }
}

#[cfg(not(feature = "viewer"))]
fn view(_args: &Args, _reporter: &Reporter, _runs: &tbsim::RunCollection) {}
