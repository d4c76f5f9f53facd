//! CSV data layer: ingest, session filtering, augmented export.

pub mod export;
pub mod ingest;
pub mod session;

pub use export::AugmentedFrame;
pub use ingest::{read_bars_csv, DataError};
pub use session::{default_session_boundaries, filter_session};
