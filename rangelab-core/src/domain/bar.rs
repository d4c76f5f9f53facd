//! Bar — the fundamental market data unit.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used by the cached quote files (`2024-01-09 10:00:05`).
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One OHLCV bar of a single instrument.
///
/// Bars come from range-bar quote caches, so `size` (the precomputed
/// bar magnitude used by the outcome labeler) may or may not be
/// present in the source file. Intraday timestamps are naive: the
/// source data carries no zone and all filtering is done on the
/// literal time of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(with = "datetime_format")]
    pub datetime: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(alias = "vol")]
    pub volume: f64,
    #[serde(default)]
    pub size: Option<f64>,
}

impl Bar {
    /// Returns true if any OHLC field is NaN (void bar).
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Basic OHLC sanity check: high >= low, extremes bracket open and close.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }

    /// Strictly rising candle: `close > open`.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Strictly falling candle: `close < open`.
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// Serde adapter for the quote-cache datetime format.
///
/// Accepts the space-separated cache format and, as a fallback on
/// read, RFC 3339-style `T`-separated timestamps.
pub mod datetime_format {
    use super::DATETIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f"))
            .map_err(serde::de::Error::custom)
    }
}
