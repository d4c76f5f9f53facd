//! RangeLab Core — bar domain types, indicators, signal detection, outcome labeling.
//!
//! This crate contains the analysis engine behind the `rangelab` CLI:
//! - Domain types (OHLCV bars with optional range-bar size)
//! - Adaptive Laguerre Filter with multi-alpha parallel sweep
//! - Volume-Stops 3-bar pattern detector
//! - Forward-scanning trade-outcome labeler (historical analysis only)
//! - CSV ingest/export and session-boundary filtering
//!
//! All series computations are batch operations over an in-memory
//! `&[Bar]`. Every output series has exactly the same length as the
//! input and aligns to it index-for-index.

pub mod data;
pub mod domain;
pub mod indicators;
pub mod outcome;
pub mod signals;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all core types are Send + Sync.
    ///
    /// The multi-alpha sweep hands bar slices to rayon worker threads,
    /// so every type that crosses that boundary must satisfy this.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Bar>();
        require_sync::<domain::Bar>();

        require_send::<indicators::Laguerre>();
        require_sync::<indicators::Laguerre>();
        require_send::<indicators::IndicatorValues>();
        require_sync::<indicators::IndicatorValues>();

        require_send::<signals::VolumeStops>();
        require_sync::<signals::VolumeStops>();
        require_send::<signals::StopLevels>();
        require_sync::<signals::StopLevels>();

        require_send::<outcome::TradeOutcome>();
        require_sync::<outcome::TradeOutcome>();

        require_send::<data::DataError>();
        require_sync::<data::DataError>();
    }
}
