//! Volume-Stops — 3-bar volume-trend / candle-direction pattern detector.
//!
//! For each bar i >= 2 the window (i-2, i-1, i) is checked against four
//! independent patterns. A match emits a stop price level anchored to
//! bar i's extreme, offset by a fixed number of price units:
//!
//! | kind   | volume trend        | bars i-2, i-1   | bar i           | level              |
//! |--------|---------------------|-----------------|-----------------|--------------------|
//! | long1  | strictly increasing | bearish-or-flat | bullish-or-flat | `low[i] - offset`  |
//! | short1 | strictly increasing | bullish-or-flat | bearish-or-flat | `high[i] + offset` |
//! | long2  | strictly decreasing | bearish-or-flat | bullish-or-flat | `low[i] - offset`  |
//! | short2 | strictly decreasing | bullish-or-flat | bearish-or-flat | `high[i] + offset` |
//!
//! "Bearish-or-flat" is `open >= close`, "bullish-or-flat" is
//! `open <= close`; a doji bar satisfies both, so long and short kinds
//! of the same volume trend can fire on one bar. The two volume trends
//! are mutually exclusive. Absence of a signal is `None`, never zero.

use crate::domain::Bar;

/// Stop level distance from the trigger bar's extreme, in price units.
pub const DEFAULT_STOP_OFFSET: f64 = 40.0;

/// The four Volume-Stops signal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopKind {
    /// Rising volume, two falling bars, then a rising bar.
    Long1,
    /// Rising volume, two rising bars, then a falling bar.
    Short1,
    /// Falling volume, two falling bars, then a rising bar.
    Long2,
    /// Falling volume, two rising bars, then a falling bar.
    Short2,
}

/// Per-bar stop levels, one optional price per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StopLevels {
    pub long1: Option<f64>,
    pub short1: Option<f64>,
    pub long2: Option<f64>,
    pub short2: Option<f64>,
}

impl StopLevels {
    pub fn get(&self, kind: StopKind) -> Option<f64> {
        match kind {
            StopKind::Long1 => self.long1,
            StopKind::Short1 => self.short1,
            StopKind::Long2 => self.long2,
            StopKind::Short2 => self.short2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.long1.is_none() && self.short1.is_none() && self.long2.is_none() && self.short2.is_none()
    }
}

/// Volume-Stops detector with a configurable price offset.
#[derive(Debug, Clone)]
pub struct VolumeStops {
    offset: f64,
}

impl VolumeStops {
    pub fn new(offset: f64) -> Self {
        assert!(
            offset.is_finite() && offset >= 0.0,
            "stop offset must be finite and non-negative, got {offset}"
        );
        Self { offset }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Detect stop levels for every bar.
    ///
    /// Returns one `StopLevels` per input bar (empty for i < 2). The
    /// detector only looks backward, so it is safe on live history.
    pub fn detect(&self, bars: &[Bar]) -> Vec<StopLevels> {
        let mut levels = vec![StopLevels::default(); bars.len()];

        for i in 2..bars.len() {
            let (a, b, c) = (&bars[i - 2], &bars[i - 1], &bars[i]);

            let vol_rising = a.volume < b.volume && b.volume < c.volume;
            let vol_falling = a.volume > b.volume && b.volume > c.volume;

            let two_down = a.open >= a.close && b.open >= b.close;
            let two_up = a.open <= a.close && b.open <= b.close;
            let third_up = c.open <= c.close;
            let third_down = c.open >= c.close;

            let out = &mut levels[i];
            if vol_rising && two_down && third_up {
                out.long1 = Some(c.low - self.offset);
            }
            if vol_rising && two_up && third_down {
                out.short1 = Some(c.high + self.offset);
            }
            if vol_falling && two_down && third_up {
                out.long2 = Some(c.low - self.offset);
            }
            if vol_falling && two_up && third_down {
                out.short2 = Some(c.high + self.offset);
            }
        }

        levels
    }
}

impl Default for VolumeStops {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_OFFSET)
    }
}
