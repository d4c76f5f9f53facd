//! Multi-alpha ALF sweep.
//!
//! Each alpha owns a private Laguerre cascade, so the sweep is
//! embarrassingly parallel: one rayon task per alpha, results returned
//! in the caller's alpha order.

use rayon::prelude::*;

use crate::domain::Bar;
use crate::indicators::indicator::Indicator;
use crate::indicators::laguerre::Laguerre;

/// Compute one ALF series per alpha, in parallel.
///
/// Returns `(alpha, series)` pairs in the same order as `alphas`.
/// Preconditions as for [`Laguerre::new`]: every alpha in (0, 1).
pub fn laguerre_sweep(bars: &[Bar], alphas: &[f64]) -> Vec<(f64, Vec<f64>)> {
    alphas
        .par_iter()
        .map(|&alpha| (alpha, Laguerre::new(alpha).compute(bars)))
        .collect()
}

/// Build an inclusive alpha grid `start, start+step, ..` up to `stop`,
/// with each value rounded to two decimals.
///
/// Rounding first keeps the grid free of accumulated float drift, so
/// `alpha_range(0.30, 0.39, 0.01)` yields exactly
/// `[0.30, 0.31, .., 0.39]` and the derived column names stay short.
pub fn alpha_range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    assert!(step > 0.0, "alpha step must be positive, got {step}");
    let mut alphas = Vec::new();
    let mut i = 0u32;
    loop {
        let alpha = ((start + f64::from(i) * step) * 100.0).round() / 100.0;
        if alpha > stop + 1e-9 {
            break;
        }
        alphas.push(alpha);
        i += 1;
    }
    alphas
}
