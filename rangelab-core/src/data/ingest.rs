//! CSV bar ingestion.
//!
//! Reads quote-cache CSV files with columns
//! `datetime,open,high,low,close,volume[,size]`. Some caches carry the
//! volume column under the header `vol`; the serde alias on `Bar`
//! accepts both. Extra columns (indicator output from a previous run)
//! are ignored, so an augmented file re-reads cleanly.

use std::path::Path;

use crate::domain::Bar;

/// Errors from the data loading layer.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Missing or malformed columns surface here (fail fast, no recovery).
    #[error("invalid input in {path}: {source}")]
    InvalidInput {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path} contains no bars")]
    EmptySequence { path: String },
}

/// Read an ordered bar sequence from a CSV file.
///
/// Row order is preserved; no sorting or de-duplication is applied.
/// Fails with `EmptySequence` on a header-only file.
pub fn read_bars_csv(path: &Path) -> Result<Vec<Bar>, DataError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| DataError::Io {
        path: display.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bars = Vec::new();
    for record in reader.deserialize() {
        let bar: Bar = record.map_err(|source| DataError::InvalidInput {
            path: display.clone(),
            source,
        })?;
        bars.push(bar);
    }

    if bars.is_empty() {
        return Err(DataError::EmptySequence { path: display });
    }
    Ok(bars)
}
