//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - data points: `o`
//! - fitted curve: `-` line
//! - reference curve `sin(x)`: `.` line
//!
//! The y-range follows the data and the reference curve. Fitted curves that
//! leave that range (overfits typically do) are clipped instead of rescaling
//! the whole plot.

use std::f64::consts::TAU;

use crate::data::reference_curve;
use crate::domain::{Dataset, FittedModel, ModelFile};
use crate::interp::linspace;

/// A polyline and the character used to draw it.
struct Layer<'a> {
    points: &'a [(f64, f64)],
    ch: char,
}

/// Render data, reference curve and fitted model over `[0, 2π]`.
pub fn render_fit_plot(data: &Dataset, model: &FittedModel, width: usize, height: usize) -> String {
    let (x_min, x_max) = (0.0, TAU);
    let xs = linspace(x_min, x_max, width.max(2));
    let fitted: Vec<(f64, f64)> = xs.iter().map(|&x| (x, model.evaluate(x))).collect();
    let reference: Vec<(f64, f64)> = xs.iter().map(|&x| (x, reference_curve(x))).collect();
    let points: Vec<(f64, f64)> = data.points().collect();

    let y_bounds = y_range(points.iter().chain(reference.iter()).map(|&(_, y)| y));
    let (y_min, y_max) = y_bounds.map(|(lo, hi)| pad_range(lo, hi, 0.1)).unwrap_or((-1.5, 1.5));

    // Fitted first so it wins over the reference where they overlap.
    let layers = [
        Layer { points: &fitted, ch: '-' },
        Layer { points: &reference, ch: '.' },
    ];
    render_plot(&points, &layers, (x_min, x_max), (y_min, y_max), width, height)
}

/// Render the fitted grid stored in a model file (curve only).
pub fn render_model_file_plot(file: &ModelFile, width: usize, height: usize) -> String {
    let curve: Vec<(f64, f64)> = file
        .grid
        .x
        .iter()
        .zip(file.grid.y.iter())
        .map(|(&x, &y)| (x, y))
        .collect();

    let (x_min, x_max) = x_range(&curve).unwrap_or((0.0, TAU));
    let (y_min, y_max) = y_range(curve.iter().map(|&(_, y)| y))
        .map(|(lo, hi)| pad_range(lo, hi, 0.05))
        .unwrap_or((-1.0, 1.0));

    let layers = [Layer { points: &curve, ch: '-' }];
    render_plot(&[], &layers, (x_min, x_max), (y_min, y_max), width, height)
}

fn render_plot(
    points: &[(f64, f64)],
    layers: &[Layer<'_>],
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curves first (so points can overlay).
    for layer in layers {
        draw_curve(&mut grid, layer.points, layer.ch, (x_min, x_max), (y_min, y_max));
    }

    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.3}, {y_max:.3}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &(x, _) in curve {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for y in values.filter(|y| y.is_finite()) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    ch: char,
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        // Out-of-range samples break the line instead of hugging the border.
        if !(y.is_finite() && y >= y_min && y <= y_max) {
            prev = None;
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        match prev {
            Some((c0, r0)) => draw_line(grid, c0, r0, col, row, ch),
            None if grid[row][col] == ' ' => grid[row][col] = ch,
            None => {}
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FitKind;

    #[test]
    fn plot_golden_snapshot_small() {
        let points = [(0.0, 0.0), (1.0, 1.0)];
        let fitted = [(0.0, 0.0), (1.0, 0.0)];
        let reference = [(0.0, 0.5), (1.0, 0.5)];
        let layers = [
            Layer { points: &fitted, ch: '-' },
            Layer { points: &reference, ch: '.' },
        ];

        let txt = render_plot(&points, &layers, (0.0, 1.0), (0.0, 1.0), 10, 5);
        let expected = concat!(
            "Plot: x=[0.000, 1.000] | y=[0.000, 1.000]\n",
            "         o\n",
            "          \n",
            "..........\n",
            "          \n",
            "o---------\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn out_of_range_curve_is_clipped() {
        let wild = [(0.0, 0.0), (0.5, 100.0), (1.0, 0.0)];
        let layers = [Layer { points: &wild, ch: '-' }];
        let txt = render_plot(&[], &layers, (0.0, 1.0), (0.0, 1.0), 10, 5);
        // Only the two in-range endpoints are drawn; nothing is joined across the gap.
        assert_eq!(txt.matches('-').count(), 2);
    }

    #[test]
    fn fit_plot_has_requested_size() {
        let data = Dataset::new(vec![1.0, 2.0, 4.0], vec![0.8, 0.9, -0.7]).unwrap();
        let model = FittedModel::new(FitKind::Plain, vec![0.0, 0.5]);
        let txt = render_fit_plot(&data, &model, 40, 12);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[1..].iter().all(|l| l.chars().count() == 40));
        let markers: usize = lines[1..].iter().map(|l| l.matches('o').count()).sum();
        assert_eq!(markers, 3);
    }
}
