//! Synthetic daily PnL series backing the dashboard bar chart.

mod controller;
mod generator;
mod summary;

pub use controller::{RegenerationTicket, SeriesController, ViewportClass};
pub use generator::{Series, SeriesError, SeriesPoint, generate_series};
pub use summary::SeriesSummary;
