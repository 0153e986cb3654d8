//! Debugging feature flags.

pub struct LogFlags {
    /// Trigger / unmount events for counters and typewriter lines.
    pub log_reveal: bool,

    /// Viewport class changes and series regeneration.
    pub log_series: bool,

    /// Page switches and modal open/close.
    pub log_navigation: bool,

    /// Warn when a frame takes longer than `slow_frame_micros`.
    pub log_performance: bool,
    pub slow_frame_micros: u128,
}

pub const DF: LogFlags = LogFlags {
    log_reveal: false,
    log_series: true,
    log_navigation: true,

    log_performance: false,
    slow_frame_micros: 16_000,
};
