//! Trade-outcome labeling — forward-scanned profit/loss classification.
//!
//! Labels each bar that follows a reversal entry trigger with the
//! outcome of a fixed-bracket trade opened at that bar:
//!
//! - A bullish bar i (`close > open`) triggers a long entry at
//!   `open[i+1]`; a bearish bar triggers the mirror short. Doji bars
//!   trigger nothing.
//! - Take-profit and stop-loss sit `size[i+1] + offset` price units
//!   from the entry, where `size` is the bar's precomputed magnitude.
//! - The level checks run against the running maximum of highs and
//!   running minimum of lows accumulated over the WHOLE series from
//!   bar 0 (not restarted at the entry), sliced from the entry bar on.
//! - Profit if the take-profit is reached strictly before the stop
//!   (an exact tie labels Loss); Loss if the stop is reached; no label
//!   if neither level is reached before the series ends.
//!
//! NON-CAUSAL: the label at bar i+1 depends on bars after i+1. This is
//! a historical-analysis pass only and must never be fed back into a
//! live or streaming signal path. Long entries are written first and
//! short entries second into one label array (a trigger bar has
//! exactly one direction, so the two passes never contend for an
//! index in practice).

use thiserror::Error;

use crate::domain::Bar;

/// Bracket distance added to the entry bar's `size`, in price units.
pub const DEFAULT_OUTCOME_OFFSET: f64 = 20.0;

/// Resolved outcome of a bracketed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeOutcome {
    Profit,
    Loss,
}

impl TradeOutcome {
    /// Column value used in CSV export ("profit" / "loss").
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeOutcome::Profit => "profit",
            TradeOutcome::Loss => "loss",
        }
    }
}

/// Errors from outcome evaluation.
#[derive(Debug, Error)]
pub enum OutcomeError {
    /// An entry bar is missing the `size` column required to place the bracket.
    #[error("bar {index} has no size value; the outcome labeler requires a size column")]
    MissingSize { index: usize },
}

/// Label every entry bar with its trade outcome.
///
/// Returns one `Option<TradeOutcome>` per input bar; `None` marks bars
/// that are not entries and entries whose bracket was never resolved.
/// Fails fast on the first entry bar without a `size` value.
pub fn evaluate_outcomes(
    bars: &[Bar],
    offset: f64,
) -> Result<Vec<Option<TradeOutcome>>, OutcomeError> {
    let n = bars.len();
    let mut outcomes = vec![None; n];
    if n < 2 {
        return Ok(outcomes);
    }

    // Running extremes over the whole series, accumulated from bar 0.
    let mut high_cummax = Vec::with_capacity(n);
    let mut low_cummin = Vec::with_capacity(n);
    let mut hi = f64::NEG_INFINITY;
    let mut lo = f64::INFINITY;
    for bar in bars {
        hi = hi.max(bar.high);
        lo = lo.min(bar.low);
        high_cummax.push(hi);
        low_cummin.push(lo);
    }

    // Long entries first, then short entries; a later pass overwrites.
    for trigger in 0..n - 1 {
        if bars[trigger].is_bullish() {
            let entry = trigger + 1;
            let bracket = bracket_width(bars, entry, offset)?;
            let entry_price = bars[entry].open;
            let tp = first_at_or_after(&high_cummax[entry..], |h| h >= entry_price + bracket);
            let sl = first_at_or_after(&low_cummin[entry..], |l| l <= entry_price - bracket);
            outcomes[entry] = resolve(tp, sl).or(outcomes[entry]);
        }
    }
    for trigger in 0..n - 1 {
        if bars[trigger].is_bearish() {
            let entry = trigger + 1;
            let bracket = bracket_width(bars, entry, offset)?;
            let entry_price = bars[entry].open;
            let tp = first_at_or_after(&low_cummin[entry..], |l| l <= entry_price - bracket);
            let sl = first_at_or_after(&high_cummax[entry..], |h| h >= entry_price + bracket);
            outcomes[entry] = resolve(tp, sl).or(outcomes[entry]);
        }
    }

    Ok(outcomes)
}

fn bracket_width(bars: &[Bar], entry: usize, offset: f64) -> Result<f64, OutcomeError> {
    bars[entry]
        .size
        .map(|size| size + offset)
        .ok_or(OutcomeError::MissingSize { index: entry })
}

/// First offset within `values` where the predicate holds.
fn first_at_or_after(values: &[f64], pred: impl Fn(f64) -> bool) -> Option<usize> {
    values.iter().position(|&v| pred(v))
}

/// Combine first-hit offsets into a label. Strict `<` sends an exact
/// tie to Loss.
fn resolve(tp: Option<usize>, sl: Option<usize>) -> Option<TradeOutcome> {
    match (tp, sl) {
        (Some(t), Some(s)) if t < s => Some(TradeOutcome::Profit),
        (Some(_), None) => Some(TradeOutcome::Profit),
        (_, Some(_)) => Some(TradeOutcome::Loss),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bar;

    /// Build a bar series from (open, high, low, close) with a fixed size.
    fn bars_from(rows: &[(f64, f64, f64, f64)], size: f64) -> Vec<Bar> {
        let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 9)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        rows.iter()
            .enumerate()
            .map(|(i, &(open, high, low, close))| Bar {
                datetime: base + chrono::Duration::minutes(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000.0,
                size: Some(size),
            })
            .collect()
    }

    #[test]
    fn long_entry_reaches_take_profit() {
        // Bar 0 bullish -> long at open[1] = 100, bracket = 5 + 5 = 10.
        // Highs march up and hit 110 at bar 3; lows never reach 90.
        let bars = bars_from(
            &[
                (95.0, 99.0, 94.0, 98.0),
                (100.0, 103.0, 99.0, 102.0),
                (102.0, 107.0, 101.0, 106.0),
                (106.0, 111.0, 105.0, 110.0),
            ],
            5.0,
        );
        let outcomes = evaluate_outcomes(&bars, 5.0).unwrap();
        assert_eq!(outcomes[1], Some(TradeOutcome::Profit));
        assert_eq!(outcomes[0], None);
    }

    #[test]
    fn long_entry_hits_stop_first() {
        // Long at 100, bracket 10: low touches 90 on bar 2 while highs
        // stay below 110 until bar 3.
        let bars = bars_from(
            &[
                (95.0, 99.0, 94.0, 98.0),
                (100.0, 101.0, 96.0, 97.0),
                (97.0, 98.0, 89.0, 90.5),
                (90.5, 112.0, 90.0, 111.0),
            ],
            5.0,
        );
        let outcomes = evaluate_outcomes(&bars, 5.0).unwrap();
        assert_eq!(outcomes[1], Some(TradeOutcome::Loss));
    }

    #[test]
    fn exact_tie_labels_loss() {
        // Long at 100, bracket 10: bar 2 spans both 110 and 90, so TP
        // and SL first become true at the same forward offset.
        let bars = bars_from(
            &[
                (95.0, 99.0, 94.0, 98.0),
                (100.0, 102.0, 99.0, 101.0),
                (101.0, 110.0, 90.0, 100.0),
            ],
            5.0,
        );
        let outcomes = evaluate_outcomes(&bars, 5.0).unwrap();
        assert_eq!(outcomes[1], Some(TradeOutcome::Loss));
    }

    #[test]
    fn short_entry_mirrors_long() {
        // Bar 0 bearish -> short at open[1] = 100, bracket 10: lows
        // fall to 90 before highs rise to 110.
        let bars = bars_from(
            &[
                (98.0, 99.0, 94.0, 95.0),
                (100.0, 101.0, 96.0, 97.0),
                (97.0, 98.0, 89.5, 90.0),
            ],
            5.0,
        );
        let outcomes = evaluate_outcomes(&bars, 5.0).unwrap();
        assert_eq!(outcomes[1], Some(TradeOutcome::Profit));
    }

    #[test]
    fn unresolved_entry_stays_unlabeled() {
        // Long at 100, bracket 10: the series ends inside the bracket.
        let bars = bars_from(
            &[
                (95.0, 99.0, 94.0, 98.0),
                (100.0, 104.0, 97.0, 103.0),
                (103.0, 105.0, 99.0, 100.0),
            ],
            5.0,
        );
        let outcomes = evaluate_outcomes(&bars, 5.0).unwrap();
        assert_eq!(outcomes[1], None);
    }

    #[test]
    fn doji_triggers_nothing() {
        let bars = bars_from(
            &[
                (100.0, 101.0, 99.0, 100.0),
                (100.0, 120.0, 80.0, 100.0),
            ],
            5.0,
        );
        let outcomes = evaluate_outcomes(&bars, 5.0).unwrap();
        assert!(outcomes.iter().all(Option::is_none));
    }

    #[test]
    fn running_extremes_accumulate_from_bar_zero() {
        // The cumulative high from an early spike (bar 0 high = 115)
        // satisfies a later long's take-profit immediately, even though
        // no bar after entry trades that high. The extremes are
        // intentionally whole-series, not per-entry.
        let bars = bars_from(
            &[
                (95.0, 115.0, 94.0, 98.0),
                (100.0, 101.0, 99.0, 100.5),
                (100.5, 101.0, 99.0, 100.0),
            ],
            5.0,
        );
        let outcomes = evaluate_outcomes(&bars, 5.0).unwrap();
        assert_eq!(outcomes[1], Some(TradeOutcome::Profit));
    }

    #[test]
    fn missing_size_is_a_typed_error() {
        let mut bars = bars_from(
            &[
                (95.0, 99.0, 94.0, 98.0),
                (100.0, 103.0, 99.0, 102.0),
            ],
            5.0,
        );
        bars[1].size = None;
        let err = evaluate_outcomes(&bars, 5.0).unwrap_err();
        assert!(matches!(err, OutcomeError::MissingSize { index: 1 }));
    }

    #[test]
    fn adjacent_long_and_short_entries_label_independently() {
        let bars = bars_from(
            &[
                (95.0, 99.0, 94.0, 98.0),   // bullish -> long entry at 1
                (100.0, 101.0, 96.0, 97.0), // bearish -> short entry at 2
                (97.0, 98.0, 89.5, 90.0),
                (90.0, 91.0, 84.0, 85.0),
            ],
            5.0,
        );
        let outcomes = evaluate_outcomes(&bars, 5.0).unwrap();
        // Long at open[1]=100, bracket 10, cummin hits 90 at offset 1
        // before cummax ever reaches 110 -> loss.
        assert_eq!(outcomes[1], Some(TradeOutcome::Loss));
        // Short at open[2]=97, bracket 10, cummin hits 87 at offset 1
        // (bar 3, low 84) and cummax stays below 107 -> profit.
        assert_eq!(outcomes[2], Some(TradeOutcome::Profit));
    }

    #[test]
    fn output_length_matches_input() {
        let bars = bars_from(&[(1.0, 2.0, 0.5, 1.5); 5], 0.5);
        assert_eq!(evaluate_outcomes(&bars, 1.0).unwrap().len(), 5);
        assert!(evaluate_outcomes(&[], 1.0).unwrap().is_empty());
    }
}
