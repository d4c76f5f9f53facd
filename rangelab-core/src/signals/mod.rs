//! Signal detectors over bar series.

pub mod volume_stops;

pub use volume_stops::{StopKind, StopLevels, VolumeStops, DEFAULT_STOP_OFFSET};
