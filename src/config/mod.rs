//! Configuration module for the showcase app.

// Can all be private now because we have a public re-export.
mod animation;
mod dashboard;
mod debug;
mod landing;
mod persistence;
mod series;
mod types;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use animation::{REVEAL, RevealConfig};
pub use dashboard::{
    ActiveTrade, BalanceFigure, DashboardConfig, HistoricalTrade, ProfitFigure, TradeSide, WinRate,
};
pub use debug::DF;
pub use landing::{
    CounterStat, FaqContent, FaqEntry, FooterContent, HeroContent, HeroStat, LandingContent,
    LinkColumn, PerformanceContent, PricingPlan, StatCard, Step, TerminalLine, TerminalTone, Trend,
    TrendMetric,
};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
pub use series::{PNL_SAMPLE_MAX, PNL_SAMPLE_MIN, SERIES, SeriesConfig};
pub use types::{AppConfig, ConfigError};
