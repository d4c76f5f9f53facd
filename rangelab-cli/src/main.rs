//! RangeLab CLI — indicator and outcome commands over bar CSV files.
//!
//! Commands:
//! - `indicators` — ALF smoothing (single alpha or a swept range) plus
//!   Volume-Stops levels, written as an augmented CSV
//! - `outcomes` — forward-scanned profit/loss labels per entry bar,
//!   written as an augmented CSV (historical analysis only)

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rangelab_core::data::{
    default_session_boundaries, filter_session, read_bars_csv, AugmentedFrame,
};
use rangelab_core::indicators::{alpha_range, laguerre_sweep, IndicatorValues};
use rangelab_core::outcome::{evaluate_outcomes, TradeOutcome, DEFAULT_OUTCOME_OFFSET};
use rangelab_core::signals::{VolumeStops, DEFAULT_STOP_OFFSET};

#[derive(Parser)]
#[command(
    name = "rangelab",
    about = "RangeLab CLI — offline range-bar indicator and outcome analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute ALF series and Volume-Stops levels, write an augmented CSV.
    Indicators {
        /// Input bar CSV (datetime,open,high,low,close,volume[,size]; `vol` accepted).
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path.
        #[arg(long)]
        output: PathBuf,

        /// ALF alpha in (0,1). Repeatable. Defaults to 0.4 when no
        /// alpha flag is given.
        #[arg(long)]
        alpha: Vec<f64>,

        /// Swept alpha grid as START:STOP:STEP (inclusive, 2-decimal
        /// rounding), e.g. 0.30:0.39:0.01. Combines with --alpha.
        #[arg(long)]
        alpha_range: Option<String>,

        /// Volume-Stops level distance in price units.
        #[arg(long, default_value_t = DEFAULT_STOP_OFFSET)]
        stop_offset: f64,

        /// Drop bars stamped at the fixed session-boundary times.
        #[arg(long, default_value_t = false)]
        filter_session: bool,
    },
    /// Label bars with forward-scanned trade outcomes, write an augmented CSV.
    Outcomes {
        /// Input bar CSV; must carry a `size` column.
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path.
        #[arg(long)]
        output: PathBuf,

        /// Bracket distance added to the entry bar's size, in price units.
        #[arg(long, default_value_t = DEFAULT_OUTCOME_OFFSET)]
        offset: f64,

        /// Drop bars stamped at the fixed session-boundary times.
        #[arg(long, default_value_t = false)]
        filter_session: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Indicators {
            input,
            output,
            alpha,
            alpha_range,
            stop_offset,
            filter_session,
        } => run_indicators(
            &input,
            &output,
            alpha,
            alpha_range.as_deref(),
            stop_offset,
            filter_session,
        ),
        Commands::Outcomes {
            input,
            output,
            offset,
            filter_session,
        } => run_outcomes(&input, &output, offset, filter_session),
    }
}

fn load_bars(input: &PathBuf, drop_boundaries: bool) -> Result<Vec<rangelab_core::domain::Bar>> {
    let bars = read_bars_csv(input)?;
    let bars = if drop_boundaries {
        filter_session(bars, &default_session_boundaries())
    } else {
        bars
    };
    if bars.is_empty() {
        bail!(
            "{}: session filter removed every bar",
            input.display()
        );
    }
    Ok(bars)
}

fn run_indicators(
    input: &PathBuf,
    output: &PathBuf,
    mut alphas: Vec<f64>,
    range: Option<&str>,
    stop_offset: f64,
    drop_boundaries: bool,
) -> Result<()> {
    if let Some(spec) = range {
        alphas.extend(parse_alpha_range(spec)?);
    }
    if alphas.is_empty() {
        alphas.push(0.4);
    }
    for &alpha in &alphas {
        if !(alpha > 0.0 && alpha < 1.0) {
            bail!("alpha must be in (0, 1), got {alpha}");
        }
    }

    let bars = load_bars(input, drop_boundaries)?;

    let mut indicators = IndicatorValues::new();
    for (alpha, series) in laguerre_sweep(&bars, &alphas) {
        indicators.insert(format!("alf_{alpha}"), series);
    }

    let stops = VolumeStops::new(stop_offset).detect(&bars);
    let signal_count = stops.iter().filter(|s| !s.is_empty()).count();

    AugmentedFrame::new(&bars)
        .with_indicators(&indicators)
        .with_stops(&stops)
        .write_csv(output)?;

    println!(
        "{} bars, {} alpha series, {} bars with stop signals -> {}",
        bars.len(),
        alphas.len(),
        signal_count,
        output.display()
    );
    Ok(())
}

fn run_outcomes(
    input: &PathBuf,
    output: &PathBuf,
    offset: f64,
    drop_boundaries: bool,
) -> Result<()> {
    let bars = load_bars(input, drop_boundaries)?;
    let outcomes = evaluate_outcomes(&bars, offset)?;

    let profits = outcomes
        .iter()
        .filter(|o| **o == Some(TradeOutcome::Profit))
        .count();
    let losses = outcomes
        .iter()
        .filter(|o| **o == Some(TradeOutcome::Loss))
        .count();

    AugmentedFrame::new(&bars)
        .with_outcomes(&outcomes)
        .write_csv(output)?;

    println!(
        "{} bars: {} profit, {} loss, {} unlabeled -> {}",
        bars.len(),
        profits,
        losses,
        bars.len() - profits - losses,
        output.display()
    );
    Ok(())
}

/// Parse START:STOP:STEP into an inclusive 2-decimal alpha grid.
fn parse_alpha_range(spec: &str) -> Result<Vec<f64>> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() != 3 {
        bail!("--alpha-range expects START:STOP:STEP, got '{spec}'");
    }
    let parse = |s: &str, what: &str| -> Result<f64> {
        s.parse::<f64>()
            .with_context(|| format!("invalid {what} in --alpha-range '{spec}'"))
    };
    let start = parse(parts[0], "start")?;
    let stop = parse(parts[1], "stop")?;
    let step = parse(parts[2], "step")?;
    if step <= 0.0 || start > stop {
        bail!("--alpha-range needs start <= stop and a positive step, got '{spec}'");
    }
    Ok(alpha_range(start, stop, step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_range_spec_parses() {
        let alphas = parse_alpha_range("0.30:0.32:0.01").unwrap();
        assert_eq!(alphas, vec![0.30, 0.31, 0.32]);
    }

    #[test]
    fn alpha_range_spec_rejects_bad_shapes() {
        assert!(parse_alpha_range("0.30:0.32").is_err());
        assert!(parse_alpha_range("a:b:c").is_err());
        assert!(parse_alpha_range("0.32:0.30:0.01").is_err());
        assert!(parse_alpha_range("0.30:0.32:0").is_err());
    }
}
