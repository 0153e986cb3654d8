use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DashboardConfig, LandingContent, RevealConfig, SeriesConfig};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("series length for {0} viewports must be at least 1")]
    EmptySeriesLength(&'static str),
    #[error("narrow width threshold must be positive and finite, got {0}")]
    BadWidthThreshold(f32),
    #[error("pnl multiplier must be finite, got {0}")]
    BadMultiplier(f64),
    #[error("counter '{label}' has negative or non-finite target {value}")]
    BadCounterTarget { label: String, value: f64 },
    #[error("counter tick must be non-zero")]
    ZeroCounterTick,
}

/// Everything the presentation layer needs, built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dashboard: DashboardConfig,
    pub landing: LandingContent,
    pub series: SeriesConfig,
    pub animation: RevealConfig,
}

impl AppConfig {
    /// Defaults overlaid with a JSON file; missing keys keep their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::from_json_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the animators and generator rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.series.narrow_length == 0 {
            return Err(ConfigError::EmptySeriesLength("narrow"));
        }
        if self.series.wide_length == 0 {
            return Err(ConfigError::EmptySeriesLength("wide"));
        }
        let threshold = self.series.narrow_width_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::BadWidthThreshold(threshold));
        }
        if self.animation.counter_tick_ms == 0 {
            return Err(ConfigError::ZeroCounterTick);
        }
        if !self.dashboard.pnl_multiplier.is_finite() {
            return Err(ConfigError::BadMultiplier(self.dashboard.pnl_multiplier));
        }
        if let Some(bad) = self
            .landing
            .faq
            .counters
            .iter()
            .find(|c| !c.value.is_finite() || c.value < 0.0)
        {
            return Err(ConfigError::BadCounterTarget {
                label: bad.label.clone(),
                value: bad.value,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(AppConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json_str(r#"{ "dashboard": { "pnl_multiplier": 150.0 } }"#).unwrap();
        assert_eq!(config.dashboard.pnl_multiplier, 150.0);
        assert_eq!(config.dashboard.bot_name, "SolanaTrader Bot");
        assert_eq!(config.landing, LandingContent::default());
    }

    #[test]
    fn negative_counter_is_rejected() {
        let mut config = AppConfig::default();
        config.landing.faq.counters[0].value = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadCounterTarget { .. })
        ));
    }

    #[test]
    fn zero_series_length_is_rejected() {
        let config: AppConfig = serde_json::from_str(r#"{ "series": { "narrow_length": 0 } }"#).unwrap();
        assert_eq!(config.series.wide_length, 90);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptySeriesLength("narrow"))
        );
        assert!(AppConfig::from_json_str(r#"{ "series": { "wide_length": 0 } }"#).is_err());
    }

    #[test]
    fn zero_counter_tick_is_rejected() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "animation": { "counter_tick_ms": 0 } }"#).unwrap();
        assert_eq!(config.animation.counter_duration_ms, 1500);
        assert_eq!(config.validate(), Err(ConfigError::ZeroCounterTick));
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        let mut config = AppConfig::default();
        config.series.narrow_width_threshold = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::BadWidthThreshold(0.0)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json_str("{ not json").is_err());
    }
}
