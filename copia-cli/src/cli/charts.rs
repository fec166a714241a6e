//! Terminal rendering of accumulation curves

use colored::*;
use copia_core::CurveTable;

const DEFAULT_BAR_WIDTH: usize = 40;

/// Render one bar block per sample: a bar per fraction whose width is
/// proportional to the mean taxon count, annotated with mean ± dispersion.
pub fn render_curve(table: &CurveTable) -> String {
    render_curve_width(table, DEFAULT_BAR_WIDTH)
}

pub fn render_curve_width(table: &CurveTable, bar_width: usize) -> String {
    let mut output = String::new();

    let max_mean = table
        .points()
        .iter()
        .map(|point| point.mean)
        .fold(0.0f64, f64::max);

    for (sample, points) in table.per_sample() {
        output.push_str(&format!("{}\n", sample.bold()));

        for point in points {
            // Bar width proportional to mean, minimum 1 char for any value > 0
            let width = if point.mean > 0.0 && max_mean > 0.0 {
                (((point.mean / max_mean) * bar_width as f64).round() as usize)
                    .clamp(1, bar_width)
            } else {
                0
            };

            let bar = "█".repeat(width).cyan().to_string();
            let empty = "░".repeat(bar_width - width).dimmed().to_string();

            output.push_str(&format!(
                "  {:>5.2} {}{} {:>8.1} ± {:.2}\n",
                point.fraction, bar, empty, point.mean, point.dispersion
            ));
        }

        output.push('\n');
    }

    output
}
