//! Reveal animation timings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Total counter animation time
    pub counter_duration_ms: u64,
    /// Counter tick (16ms ~ 60fps)
    pub counter_tick_ms: u64,
    /// Typing speed, per character
    pub typewriter_char_ms: u64,
    /// Hero stat cards appear once the terminal has mostly typed out
    pub hero_stats_delay_ms: u64,
}

pub const REVEAL: RevealConfig = RevealConfig {
    counter_duration_ms: 1500,
    counter_tick_ms: 16,
    typewriter_char_ms: 50,
    hero_stats_delay_ms: 2500,
};

impl Default for RevealConfig {
    fn default() -> Self {
        REVEAL
    }
}
