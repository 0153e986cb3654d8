use chrono::NaiveDate;
use rand::Rng;
use strum_macros::Display;

use crate::{
    config::{DF, SeriesConfig},
    series::{Series, SeriesError, SeriesSummary, generate_series},
};

/// Which side of the narrow/wide width threshold the viewport is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f32, narrow_threshold: f32) -> Self {
        if width < narrow_threshold {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Identifies one regeneration request. Only the most recent ticket can install a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RegenerationTicket {
    generation: u64,
    length: usize,
}

impl RegenerationTicket {
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Keeps the chart series consistent with the viewport width.
///
/// Crossing the width threshold switches between the narrow and wide lengths and
/// replaces the whole series; the summary is always recomputed from the new points.
#[derive(Debug)]
pub struct SeriesController {
    multiplier: f64,
    narrow_length: usize,
    wide_length: usize,
    narrow_threshold: f32,
    class: Option<ViewportClass>,
    generation: u64,
    series: Series,
    summary: SeriesSummary,
}

impl SeriesController {
    /// Lengths below 1 are configuration mistakes; they are clamped to 1 with a warning.
    pub fn new(multiplier: f64, settings: &SeriesConfig) -> Self {
        Self {
            multiplier,
            narrow_length: clamp_length(settings.narrow_length, "narrow"),
            wide_length: clamp_length(settings.wide_length, "wide"),
            narrow_threshold: settings.narrow_width_threshold,
            class: None,
            generation: 0,
            series: Series::default(),
            summary: SeriesSummary::default(),
        }
    }

    pub fn with_defaults(multiplier: f64) -> Self {
        Self::new(multiplier, &SeriesConfig::default())
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn summary(&self) -> SeriesSummary {
        self.summary
    }

    pub fn class(&self) -> Option<ViewportClass> {
        self.class
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn length_for(&self, class: ViewportClass) -> usize {
        match class {
            ViewportClass::Narrow => self.narrow_length,
            ViewportClass::Wide => self.wide_length,
        }
    }

    /// Re-evaluates the width. Regenerates only on the first call and when the width
    /// crosses the threshold. Returns true if a new series was installed.
    pub fn on_resize<R: Rng + ?Sized>(&mut self, width: f32, today: NaiveDate, rng: &mut R) -> bool {
        let class = ViewportClass::from_width(width, self.narrow_threshold);
        if self.class == Some(class) {
            return false;
        }
        self.class = Some(class);

        #[cfg(debug_assertions)]
        if DF.log_series {
            log::info!("viewport is {} at {:.0}px, regenerating series", class, width);
        }
        self.regenerate(today, rng)
    }

    /// Starts a regeneration for the current viewport class. Any earlier
    /// outstanding ticket becomes stale.
    pub fn begin_regeneration(&mut self) -> RegenerationTicket {
        self.generation += 1;
        RegenerationTicket {
            generation: self.generation,
            length: self.length_for(self.class.unwrap_or(ViewportClass::Wide)),
        }
    }

    /// Installs `series` if `ticket` is still the latest request. Stale results are dropped.
    pub fn complete(&mut self, ticket: RegenerationTicket, series: Series) -> bool {
        if ticket.generation != self.generation {
            if DF.log_series {
                log::warn!(
                    "dropping stale series (generation {} < {})",
                    ticket.generation,
                    self.generation
                );
            }
            return false;
        }
        self.summary = SeriesSummary::from_series(&series);
        self.series = series;
        true
    }

    /// Generates synchronously for the current class and installs the result.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, today: NaiveDate, rng: &mut R) -> bool {
        let ticket = self.begin_regeneration();
        match generate_series(ticket.length(), self.multiplier, today, rng) {
            Ok(series) => self.complete(ticket, series),
            Err(err) => {
                log::error!("series generation failed: {}", err);
                false
            }
        }
    }
}

fn clamp_length(length: usize, which: &str) -> usize {
    if length == 0 {
        log::warn!("{} series length is 0, clamping to 1: {}", which, SeriesError::EmptyLength);
        return 1;
    }
    length
}
