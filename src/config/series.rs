//! Synthetic PnL series settings

use serde::{Deserialize, Serialize};

/// Native PnL is sampled uniformly from [PNL_SAMPLE_MIN, PNL_SAMPLE_MAX)
pub const PNL_SAMPLE_MIN: f64 = -3.0;
pub const PNL_SAMPLE_MAX: f64 = 7.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    pub narrow_length: usize,
    pub wide_length: usize,
    /// Viewport widths below this (logical px) count as narrow/mobile
    pub narrow_width_threshold: f32,
}

pub const SERIES: SeriesConfig = SeriesConfig {
    narrow_length: 30,
    wide_length: 90,
    narrow_width_threshold: 640.0,
};

impl Default for SeriesConfig {
    fn default() -> Self {
        SERIES
    }
}
