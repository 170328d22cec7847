//! Top-down (XY) trajectory plot rendered to SVG with plotters

use std::path::Path;

use plotters::prelude::*;

use crate::error::ExperimentError;
use crate::simulation::run::Trajectory;

const SERIES: [(&str, RGBColor); 3] = [("Body 1", RED), ("Body 2", GREEN), ("Body 3", BLUE)];

/// Draw the XY projection of all three body paths on shared axes
pub fn plot_trajectory_xy(trajectory: &Trajectory, seed: u64, out_path: &Path) -> Result<(), ExperimentError> {
    let paths: Vec<Vec<(f64, f64)>> = (0..SERIES.len())
        .map(|i| {
            trajectory
                .body_xy(i)
                .into_iter()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect()
        })
        .collect();

    let ((x_min, x_max), (y_min, y_max)) = bounds(&paths);

    let root = SVGBackend::new(out_path, (1000, 1000)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Top-Down View (XY Plane) of Most Chaotic Three-Body Run (Seed {seed})"),
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(plot_err)?;

    for (points, (label, color)) in paths.into_iter().zip(SERIES) {
        chart
            .draw_series(LineSeries::new(points, &color))
            .map_err(plot_err)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

// Padded axis ranges covering every point; unit box if there are none
fn bounds(paths: &[Vec<(f64, f64)>]) -> ((f64, f64), (f64, f64)) {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    for &(px, py) in paths.iter().flatten() {
        x = (x.0.min(px), x.1.max(px));
        y = (y.0.min(py), y.1.max(py));
    }
    (pad(x), pad(y))
}

fn pad((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo > hi {
        return (-1.0, 1.0);
    }
    let margin = ((hi - lo) * 0.05).max(1e-3);
    (lo - margin, hi + margin)
}

fn plot_err<E: std::fmt::Display>(e: E) -> ExperimentError {
    ExperimentError::Plot(e.to_string())
}
