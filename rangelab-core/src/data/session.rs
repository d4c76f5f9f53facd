//! Session-boundary filtering.
//!
//! Range-bar quote caches carry spurious bars stamped at the exchange
//! session open, the evening clearing break, and the evening reopen.
//! Those rows are removed by matching the literal time of day against
//! a fixed set before any indicator pass.

use chrono::NaiveTime;

use crate::domain::Bar;

/// The six boundary timestamps of the FORTS trading day: morning open
/// (10:00:00/:01), clearing break (19:00:00/:01), evening reopen
/// (19:05:00/:01).
pub fn default_session_boundaries() -> Vec<NaiveTime> {
    [
        (10, 0, 0),
        (10, 0, 1),
        (19, 0, 0),
        (19, 0, 1),
        (19, 5, 0),
        (19, 5, 1),
    ]
    .into_iter()
    .map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).expect("static boundary time"))
    .collect()
}

/// Drop bars whose time of day matches one of `boundaries`.
///
/// Order of the surviving bars is preserved.
pub fn filter_session(bars: Vec<Bar>, boundaries: &[NaiveTime]) -> Vec<Bar> {
    bars.into_iter()
        .filter(|bar| !boundaries.contains(&bar.datetime.time()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bar;
    use chrono::NaiveDate;

    fn bar_at(h: u32, m: u32, s: u32) -> Bar {
        Bar {
            datetime: NaiveDate::from_ymd_opt(2024, 1, 9)
                .unwrap()
                .and_hms_opt(h, m, s)
                .unwrap(),
            open: 100.0,
            high: 101.0,
            low: 99.0,
            close: 100.5,
            volume: 1000.0,
            size: None,
        }
    }

    #[test]
    fn drops_boundary_bars_and_keeps_order() {
        let bars = vec![
            bar_at(10, 0, 0),
            bar_at(10, 0, 5),
            bar_at(12, 30, 0),
            bar_at(19, 0, 1),
            bar_at(19, 5, 0),
            bar_at(19, 5, 2),
        ];
        let kept = filter_session(bars, &default_session_boundaries());
        let times: Vec<_> = kept
            .iter()
            .map(|b| b.datetime.time().to_string())
            .collect();
        assert_eq!(times, ["10:00:05", "12:30:00", "19:05:02"]);
    }

    #[test]
    fn empty_boundary_set_keeps_everything() {
        let bars = vec![bar_at(10, 0, 0), bar_at(19, 0, 0)];
        assert_eq!(filter_session(bars, &[]).len(), 2);
    }
}
