//! Fixed-width text table of run records

use std::fmt::Write;

use crate::experiment::runner::RunCollection;

const HEADERS: [&str; 7] = [
    "Seed",
    "Mean Squared Error",
    "Chaos Measure Stability (%)",
    "Final IRE Field Value",
    "Overall Coherence Score",
    "Mean Chaos Measure",
    "IRE Prediction Accuracy (%)",
];

/// Render the collection as a table, one row per seed
pub fn render_table(runs: &RunCollection) -> String {
    let rows: Vec<[String; 7]> = runs
        .records()
        .iter()
        .map(|r| {
            [
                r.seed.to_string(),
                format!("{:.6e}", r.mse),
                format!("{:.4}", r.chaos_stability),
                format!("{:.6e}", r.final_coherence),
                format!("{:.6e}", r.mean_coherence),
                format!("{:.6}", r.mean_chaos),
                format!("{:.4}", r.prediction_accuracy),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(c, w)| format!("{c:>w$}", w = *w))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | "));
}
