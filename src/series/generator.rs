use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

use crate::{
    config::{PNL_SAMPLE_MAX, PNL_SAMPLE_MIN},
    utils::{TimeUtils, round_dp},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("series length must be at least 1")]
    EmptyLength,
}

/// One day of mock PnL.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    /// Short human date, e.g. "Mar 15".
    pub date_label: String,
    /// PnL in the native unit (SOL), 2 dp.
    pub pnl_native: f64,
    /// `pnl_native` scaled by the display multiplier (USD), 2 dp.
    pub pnl_display: f64,
}

/// Contiguous run of daily points, oldest first, ending on the generation date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    pub fn native_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.pnl_native).collect()
    }

    pub fn display_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.pnl_display).collect()
    }
}

/// Builds `length` points for the days ending at `today`, sampling each native PnL
/// uniformly from [`PNL_SAMPLE_MIN`, `PNL_SAMPLE_MAX`).
pub fn generate_series<R: Rng + ?Sized>(
    length: usize,
    multiplier: f64,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Series, SeriesError> {
    if length == 0 {
        return Err(SeriesError::EmptyLength);
    }

    let points = (0..length)
        .map(|i| {
            let date = TimeUtils::days_before(today, (length - 1 - i) as u64);
            let pnl_native = round_dp(rng.gen_range(PNL_SAMPLE_MIN..PNL_SAMPLE_MAX), 2);
            SeriesPoint {
                date,
                date_label: TimeUtils::short_date_label(date),
                pnl_native,
                pnl_display: round_dp(pnl_native * multiplier, 2),
            }
        })
        .collect();

    Ok(Series { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn ninety_day_labels() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = generate_series(90, 139.33, march_15(), &mut rng).unwrap();
        assert_eq!(series.len(), 90);
        assert_eq!(series.points()[89].date_label, "Mar 15");
        assert_eq!(series.points()[0].date_label, "Dec 17");
        assert_eq!(series.last_date(), Some(march_15()));
    }

    #[test]
    fn dates_are_contiguous() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = generate_series(30, 1.0, march_15(), &mut rng).unwrap();
        for pair in series.points().windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn values_in_range_and_rounded() {
        let mut rng = StdRng::seed_from_u64(99);
        let series = generate_series(90, 139.33, march_15(), &mut rng).unwrap();
        for p in series.points() {
            assert!((-3.0..=7.0).contains(&p.pnl_native));
            assert_eq!(round_dp(p.pnl_native, 2), p.pnl_native);
            assert_eq!(p.pnl_display, round_dp(p.pnl_native * 139.33, 2));
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_series(0, 1.0, march_15(), &mut rng),
            Err(SeriesError::EmptyLength)
        );
    }

    #[test]
    fn same_seed_same_series() {
        let a = generate_series(30, 2.0, march_15(), &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_series(30, 2.0, march_15(), &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
