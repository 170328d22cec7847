//! Summary metrics for a completed run
//!
//! A [`RunRecord`] is derived once from a [`RunOutput`] and never changes
//! afterwards. Empty series give `NaN` means; nothing here panics.

use crate::simulation::run::{RunOutput, Trajectory};

/// Scale that maps the prediction MSE onto a 0..100 accuracy
const ACCURACY_SCALE: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub seed: u64,
    pub mse: f64, // constant-velocity predictor error on body 1
    pub chaos_stability: f64, // std / mean of the chaos series, in %
    pub final_coherence: f64, // last IRE value
    pub mean_coherence: f64, // mean IRE value
    pub mean_chaos: f64, // mean chaos measure
    pub prediction_accuracy: f64, // 100 - mse * 1e4, clamped to [0, 100]
}

impl RunRecord {
    pub fn from_output(output: &RunOutput) -> Self {
        let chaos = output.diagnostics.chaos();
        let coherence = output.diagnostics.coherence();

        let mse = prediction_mse(&output.trajectory, 0);

        Self {
            seed: output.seed,
            mse,
            chaos_stability: stability_percent(&chaos),
            final_coherence: coherence.last().copied().unwrap_or(f64::NAN),
            mean_coherence: mean(&coherence),
            mean_chaos: mean(&chaos),
            prediction_accuracy: prediction_accuracy(mse),
        }
    }

    /// `true` when every metric is a finite number
    pub fn is_finite(&self) -> bool {
        [
            self.mse,
            self.chaos_stability,
            self.final_coherence,
            self.mean_coherence,
            self.mean_chaos,
            self.prediction_accuracy,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Mean squared error of the one-step constant-velocity predictor
///
/// For each window `(p[i], p[i+1], p[i+2])` of body `body`, the prediction is
/// `p[i+1] + (p[i+1] - p[i])`; the error is averaged over all windows and all
/// three axes. With fewer than three samples there is nothing to score and
/// the error is 0.0.
///
/// # Panics
/// If `body >= N_BODIES`.
pub fn prediction_mse(trajectory: &Trajectory, body: usize) -> f64 {
    let p: Vec<_> = trajectory.body(body).collect();
    if p.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut count = 0usize;
    for w in p.windows(3) {
        let predicted = w[1] + (w[1] - w[0]);
        let err = w[2] - predicted;
        sum += err.norm_squared();
        count += 3;
    }

    sum / count as f64
}

/// `100 - mse * 1e4`, clamped to [0, 100]; an undefined MSE scores 0
pub fn prediction_accuracy(mse: f64) -> f64 {
    let raw = 100.0 - mse * ACCURACY_SCALE;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

/// Coefficient of variation in percent: `std / mean * 100`
///
/// Not guarded: a zero mean gives inf/NaN, an empty series NaN.
pub fn stability_percent(xs: &[f64]) -> f64 {
    std_dev(xs) / mean(xs) * 100.0
}

pub fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population standard deviation
pub fn std_dev(xs: &[f64]) -> f64 {
    let m = mean(xs);
    let var = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64;
    var.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_std_dev() {
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&xs), 5.0);
        assert_eq!(std_dev(&xs), 2.0);
        assert!((stability_percent(&xs) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn empty_series_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(stability_percent(&[]).is_nan());
    }

    #[test]
    fn zero_mean_stability_is_not_finite() {
        assert!(!stability_percent(&[0.0, 0.0, 0.0]).is_finite());
    }

    #[test]
    fn accuracy_is_clamped() {
        assert_eq!(prediction_accuracy(0.0), 100.0);
        assert_eq!(prediction_accuracy(1.0), 0.0);
        assert!((prediction_accuracy(0.001) - 90.0).abs() < 1e-9);
        assert_eq!(prediction_accuracy(f64::NAN), 0.0);
        assert_eq!(prediction_accuracy(f64::INFINITY), 0.0);
    }
}
