//! Adaptive Laguerre Filter (ALF).
//!
//! Four cascaded Laguerre stages smooth the close price:
//!
//! ```text
//! L0[t] = alpha*close[t] + (1-alpha)*L0[t-1]
//! L1[t] = -(1-alpha)*L0[t] + L0[t-1] + (1-alpha)*L1[t-1]
//! L2[t] = -(1-alpha)*L1[t] + L1[t-1] + (1-alpha)*L2[t-1]
//! L3[t] = -(1-alpha)*L2[t] + L2[t-1] + (1-alpha)*L3[t-1]
//! ALF[t] = (L0[t] + 2*L1[t] + 2*L2[t] + L3[t]) / 6
//! ```
//!
//! Each stage reads the *new* value of the stage above it and the
//! *previous* values of itself and the stage above; the fourth stage's
//! `L3[t-1]` term is read in place (it is assigned last, so no temp is
//! needed). State starts at zero, so early output is pulled toward
//! zero until the cascade charges up. Lookback: 0 (a value is emitted
//! from bar 0).

use crate::domain::Bar;
use crate::indicators::indicator::Indicator;

/// Laguerre cascade state for one filter pass.
///
/// Owned by a single `compute` invocation; a pass always starts from
/// zero and is not resumable mid-sequence.
#[derive(Debug, Clone, Copy, Default)]
struct LaguerreState {
    l0: f64,
    l1: f64,
    l2: f64,
    l3: f64,
}

impl LaguerreState {
    /// Advance the cascade by one price and return the filter output.
    fn update(&mut self, price: f64, alpha: f64) -> f64 {
        let gamma = 1.0 - alpha;
        let (l0_old, l1_old, l2_old) = (self.l0, self.l1, self.l2);

        self.l0 = alpha * price + gamma * l0_old;
        self.l1 = -gamma * self.l0 + l0_old + gamma * l1_old;
        self.l2 = -gamma * self.l1 + l1_old + gamma * l2_old;
        self.l3 = -gamma * self.l2 + l2_old + gamma * self.l3;

        (self.l0 + 2.0 * self.l1 + 2.0 * self.l2 + self.l3) / 6.0
    }
}

/// Adaptive Laguerre Filter over bar close prices.
#[derive(Debug, Clone)]
pub struct Laguerre {
    alpha: f64,
    name: String,
}

impl Laguerre {
    /// Precondition: `alpha` in (0, 1), exclusive on both ends.
    pub fn new(alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "ALF alpha must be in (0, 1), got {alpha}"
        );
        Self {
            alpha,
            name: format!("alf_{alpha}"),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Indicator for Laguerre {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let mut state = LaguerreState::default();
        bars.iter()
            .map(|bar| state.update(bar.close, self.alpha))
            .collect()
    }
}

/// Compute raw ALF values from a pre-extracted f64 slice.
pub fn laguerre_of_series(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut state = LaguerreState::default();
    values.iter().map(|&p| state.update(p, alpha)).collect()
}
