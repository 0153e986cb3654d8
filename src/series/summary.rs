use crate::{
    series::Series,
    utils::{mean, round_dp},
};

/// Means over a [`Series`]. Only ever derived, never set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesSummary {
    mean_native: f64,
    mean_display: f64,
}

impl SeriesSummary {
    /// Averages the raw values and rounds each mean to 2 dp once, at the end.
    pub fn from_series(series: &Series) -> Self {
        Self {
            mean_native: round_dp(mean(&series.native_values()), 2),
            mean_display: round_dp(mean(&series.display_values()), 2),
        }
    }

    pub fn mean_native(&self) -> f64 {
        self.mean_native
    }

    pub fn mean_display(&self) -> f64 {
        self.mean_display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::generate_series;
    use chrono::NaiveDate;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn mean_matches_arithmetic_mean() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let series = generate_series(90, 139.33, today, &mut StdRng::seed_from_u64(3)).unwrap();
        let summary = SeriesSummary::from_series(&series);

        let native: f64 = series.points().iter().map(|p| p.pnl_native).sum::<f64>() / 90.0;
        let display: f64 = series.points().iter().map(|p| p.pnl_display).sum::<f64>() / 90.0;
        assert!((summary.mean_native() - native).abs() <= 0.005 + 1e-9);
        assert!((summary.mean_display() - display).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn empty_series_has_zero_means() {
        let summary = SeriesSummary::from_series(&Series::default());
        assert_eq!(summary, SeriesSummary::default());
    }
}
