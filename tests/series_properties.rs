//! Integration tests: synthetic PnL series generation, summary means and the
//! width-driven controller, all with a seeded RNG so runs are reproducible.

use chrono::{Duration, NaiveDate};
use rand::{SeedableRng, rngs::StdRng};
use tradebot_site::{
    AppConfig, ConfigError, SeriesController, SeriesSummary, generate_series,
    series::ViewportClass,
};

const MULTIPLIER: f64 = 139.33;

fn march_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

#[test]
fn series_shape_for_both_lengths() {
    let mut rng = StdRng::seed_from_u64(2024);
    for length in [30, 90] {
        let series = generate_series(length, MULTIPLIER, march_15(), &mut rng).unwrap();
        assert_eq!(series.len(), length);
        assert_eq!(series.last_date(), Some(march_15()));

        let points = series.points();
        for pair in points.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        for p in points {
            assert!((-3.0..=7.0).contains(&p.pnl_native));
            assert_eq!((p.pnl_native * 100.0).round() / 100.0, p.pnl_native);
            let expected = ((p.pnl_native * MULTIPLIER) * 100.0).round() / 100.0;
            assert_eq!(p.pnl_display, expected);
        }
    }
}

#[test]
fn ninety_days_ending_march_15() {
    let mut rng = StdRng::seed_from_u64(1);
    let series = generate_series(90, MULTIPLIER, march_15(), &mut rng).unwrap();
    assert_eq!(series.points()[89].date_label, "Mar 15");
    assert_eq!(series.points()[0].date_label, "Dec 17");
    assert_eq!(
        series.first_date(),
        NaiveDate::from_ymd_opt(2023, 12, 17)
    );
}

#[test]
fn summary_mean_within_a_cent_of_arithmetic_mean() {
    let mut rng = StdRng::seed_from_u64(99);
    let series = generate_series(90, MULTIPLIER, march_15(), &mut rng).unwrap();
    let summary = SeriesSummary::from_series(&series);

    let native: f64 = series.native_values().iter().sum::<f64>() / 90.0;
    let display: f64 = series.display_values().iter().sum::<f64>() / 90.0;
    assert!((summary.mean_native() - native).abs() <= 0.01);
    assert!((summary.mean_display() - display).abs() <= 0.01);
}

#[test]
fn same_seed_same_series() {
    let a = generate_series(30, MULTIPLIER, march_15(), &mut StdRng::seed_from_u64(5)).unwrap();
    let b = generate_series(30, MULTIPLIER, march_15(), &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn crossing_the_width_threshold_replaces_the_series() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut controller = SeriesController::with_defaults(MULTIPLIER);

    assert!(controller.on_resize(1280.0, march_15(), &mut rng));
    assert_eq!(controller.class(), Some(ViewportClass::Wide));
    assert_eq!(controller.series().len(), 90);
    let wide = controller.series().clone();

    // Same class: nothing regenerates.
    assert!(!controller.on_resize(900.0, march_15(), &mut rng));
    assert_eq!(controller.series(), &wide);

    assert!(controller.on_resize(400.0, march_15(), &mut rng));
    assert_eq!(controller.series().len(), 30);
    assert_eq!(controller.series().last_date(), Some(march_15()));
    assert_eq!(
        controller.summary(),
        SeriesSummary::from_series(controller.series())
    );
}

#[test]
fn only_the_latest_regeneration_is_installed() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut controller = SeriesController::with_defaults(MULTIPLIER);
    controller.on_resize(1280.0, march_15(), &mut rng);

    let stale = controller.begin_regeneration();
    let fresh = controller.begin_regeneration();
    let stale_series = generate_series(stale.length(), MULTIPLIER, march_15(), &mut rng).unwrap();
    let fresh_series = generate_series(fresh.length(), MULTIPLIER, march_15(), &mut rng).unwrap();

    assert!(controller.complete(fresh, fresh_series.clone()));
    assert!(!controller.complete(stale, stale_series));
    assert_eq!(controller.series(), &fresh_series);
}

#[test]
fn default_config_is_valid_and_json_overrides_merge() {
    AppConfig::default().validate().unwrap();

    let config = AppConfig::from_json_str(r#"{ "dashboard": { "pnl_multiplier": 150.0 } }"#).unwrap();
    assert_eq!(config.dashboard.pnl_multiplier, 150.0);
    // Untouched sections keep their defaults.
    assert_eq!(config.landing, AppConfig::default().landing);
    assert_eq!(
        config.dashboard.active_trades,
        AppConfig::default().dashboard.active_trades
    );
}

#[test]
fn zero_series_length_in_json_is_rejected() {
    let err = AppConfig::from_json_str(r#"{ "series": { "narrow_length": 0 } }"#).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::EmptySeriesLength("narrow"))
    );
}

#[test]
fn json_series_lengths_reach_the_controller() {
    let config = AppConfig::from_json_str(
        r#"{ "series": { "narrow_length": 12, "wide_length": 60 } }"#,
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(21);
    let mut controller = SeriesController::new(MULTIPLIER, &config.series);
    controller.on_resize(300.0, march_15(), &mut rng);
    assert_eq!(controller.series().len(), 12);
    controller.on_resize(1600.0, march_15(), &mut rng);
    assert_eq!(controller.series().len(), 60);
}
