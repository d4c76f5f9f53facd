//! Augmented CSV export.
//!
//! Writes the input bar sequence back out with indicator, stop-level,
//! and outcome columns appended. Row count and row order always match
//! the input; absent values become empty cells. Numeric cells use the
//! shortest exact float representation, so a written file re-read
//! through `read_bars_csv` reproduces the bar values bit-for-bit.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::domain::bar::DATETIME_FORMAT;
use crate::domain::Bar;
use crate::indicators::IndicatorValues;
use crate::outcome::TradeOutcome;
use crate::signals::StopLevels;

/// A bar sequence plus the optional per-bar columns produced by the
/// analysis passes. All attached series must match the bar count.
pub struct AugmentedFrame<'a> {
    bars: &'a [Bar],
    indicators: Option<&'a IndicatorValues>,
    stops: Option<&'a [StopLevels]>,
    outcomes: Option<&'a [Option<TradeOutcome>]>,
}

impl<'a> AugmentedFrame<'a> {
    pub fn new(bars: &'a [Bar]) -> Self {
        Self {
            bars,
            indicators: None,
            stops: None,
            outcomes: None,
        }
    }

    /// Attach indicator series; columns are emitted in insertion order.
    pub fn with_indicators(mut self, indicators: &'a IndicatorValues) -> Self {
        self.indicators = Some(indicators);
        self
    }

    pub fn with_stops(mut self, stops: &'a [StopLevels]) -> Self {
        self.stops = Some(stops);
        self
    }

    pub fn with_outcomes(mut self, outcomes: &'a [Option<TradeOutcome>]) -> Self {
        self.outcomes = Some(outcomes);
        self
    }

    /// Serialize the frame to CSV text.
    pub fn to_csv_string(&self) -> Result<String> {
        self.check_lengths()?;

        let mut wtr = csv::Writer::from_writer(vec![]);
        let has_size = self.bars.iter().any(|b| b.size.is_some());

        // Header
        let mut header: Vec<String> = ["datetime", "open", "high", "low", "close", "volume"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        if has_size {
            header.push("size".into());
        }
        if let Some(ind) = self.indicators {
            header.extend(ind.names().iter().cloned());
        }
        if self.stops.is_some() {
            header.extend(["long1", "short1", "long2", "short2"].map(String::from));
        }
        if self.outcomes.is_some() {
            header.push("trade_result".into());
        }
        wtr.write_record(&header)?;

        for (i, bar) in self.bars.iter().enumerate() {
            let mut row: Vec<String> = vec![
                bar.datetime.format(DATETIME_FORMAT).to_string(),
                bar.open.to_string(),
                bar.high.to_string(),
                bar.low.to_string(),
                bar.close.to_string(),
                bar.volume.to_string(),
            ];
            if has_size {
                row.push(opt_cell(bar.size));
            }
            if let Some(ind) = self.indicators {
                for name in ind.names() {
                    // Length was checked up front; index i is in range.
                    row.push(ind.get(name, i).map(|v| v.to_string()).unwrap_or_default());
                }
            }
            if let Some(stops) = self.stops {
                let s = &stops[i];
                row.push(opt_cell(s.long1));
                row.push(opt_cell(s.short1));
                row.push(opt_cell(s.long2));
                row.push(opt_cell(s.short2));
            }
            if let Some(outcomes) = self.outcomes {
                row.push(outcomes[i].map(|o| o.as_str().to_string()).unwrap_or_default());
            }
            wtr.write_record(&row)?;
        }

        let data = wtr.into_inner().context("failed to flush CSV writer")?;
        String::from_utf8(data).context("CSV output is not valid UTF-8")
    }

    /// Write the frame to a CSV file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let csv = self.to_csv_string()?;
        std::fs::write(path, csv)
            .with_context(|| format!("failed to write CSV {}", path.display()))
    }

    fn check_lengths(&self) -> Result<()> {
        let n = self.bars.len();
        if let Some(ind) = self.indicators {
            for name in ind.names() {
                let len = ind.get_series(name).map(|s| s.len()).unwrap_or(0);
                if len != n {
                    bail!("indicator series '{name}' has {len} values for {n} bars");
                }
            }
        }
        if let Some(stops) = self.stops {
            if stops.len() != n {
                bail!("stop series has {} values for {n} bars", stops.len());
            }
        }
        if let Some(outcomes) = self.outcomes {
            if outcomes.len() != n {
                bail!("outcome series has {} values for {n} bars", outcomes.len());
            }
        }
        Ok(())
    }
}

fn opt_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
