// src/app/state.rs

use {
    clap::ValueEnum,
    rand::{SeedableRng, rngs::StdRng},
    serde::{Deserialize, Serialize},
    std::time::Duration,
    strum_macros::Display,
};

use crate::{
    config::{DF, DashboardConfig, LandingContent, RevealConfig, SeriesConfig},
    reveal::{
        CounterAnimator, CounterReveal, OneShotTimer, Reveal, RevealTrigger, TypewriterAnimator,
        TypewriterReveal,
    },
    series::SeriesController,
};

/// Top-level page. Persisted so a restart lands where the user left off.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, ValueEnum,
)]
pub enum Page {
    #[default]
    Landing,
    Dashboard,
}

#[derive(Default)]
pub(crate) enum AppState {
    /// Nothing mounted yet. The first frame mounts the selected page.
    #[default]
    Starting,
    Landing(LandingState),
    Dashboard(DashboardState),
}

impl AppState {
    pub(crate) fn page(&self) -> Option<Page> {
        match self {
            AppState::Starting => None,
            AppState::Landing(_) => Some(Page::Landing),
            AppState::Dashboard(_) => Some(Page::Dashboard),
        }
    }
}

/// Landing sections reachable from nav links and CTAs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum LandingAnchor {
    HowItWorks,
    Performance,
    Pricing,
    Faq,
}

/// Everything animated on the landing page. Dropped (and so unmounted) on navigation.
pub(crate) struct LandingState {
    pub(crate) terminal: Vec<TypewriterReveal>,
    pub(crate) hero_stats: OneShotTimer,
    pub(crate) counters: Vec<CounterReveal>,
    /// Index of the expanded FAQ item. At most one is open.
    pub(crate) faq_open: Option<usize>,
    /// Section to scroll to once its heading has been laid out.
    pub(crate) pending_anchor: Option<LandingAnchor>,
}

impl LandingState {
    pub(crate) fn mount(content: &LandingContent, timing: &RevealConfig, now: Duration) -> Self {
        let char_interval = Duration::from_millis(timing.typewriter_char_ms);
        let counter_duration = Duration::from_millis(timing.counter_duration_ms);
        let counter_tick = Duration::from_millis(timing.counter_tick_ms);
        let terminal = content
            .hero
            .terminal_lines
            .iter()
            .map(|line| {
                let animator = TypewriterAnimator::new(line.text.clone())
                    .with_start_delay(Duration::from_millis(line.delay_ms))
                    .with_interval(char_interval);
                let trigger = animator.trigger();
                Reveal::mount(animator, trigger, now)
            })
            .collect();

        let counters = content
            .faq
            .counters
            .iter()
            .map(|stat| {
                let animator = CounterAnimator::new(stat.value)
                    .with_timing(counter_duration, counter_tick)
                    .with_suffix(stat.suffix.clone());
                Reveal::mount(animator, RevealTrigger::OnVisible, now)
            })
            .collect();

        Self {
            terminal,
            hero_stats: OneShotTimer::arm(now, Duration::from_millis(timing.hero_stats_delay_ms)),
            counters,
            faq_open: None,
            pending_anchor: None,
        }
    }

    /// Clicking the open item closes it; clicking another one switches to it.
    pub(crate) fn toggle_faq(&mut self, index: usize) {
        self.faq_open = if self.faq_open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Returns true exactly once for the requested anchor, clearing the request.
    pub(crate) fn take_anchor(&mut self, anchor: LandingAnchor) -> bool {
        if self.pending_anchor == Some(anchor) {
            self.pending_anchor = None;
            true
        } else {
            false
        }
    }

    /// Soonest pending change across every animation on the page.
    pub(crate) fn next_wake(&self, now: Duration) -> Option<Duration> {
        self.terminal
            .iter()
            .filter_map(|r| r.next_wake(now))
            .chain(self.counters.iter().filter_map(|r| r.next_wake(now)))
            .chain(self.hero_stats.remaining(now))
            .min()
    }

    pub(crate) fn unmount(&mut self) {
        self.terminal.iter_mut().for_each(Reveal::unmount);
        self.counters.iter_mut().for_each(Reveal::unmount);
        self.hero_stats.cancel();
    }
}

/// Dashboard chart state. The RNG lives here so a `--seed` run is reproducible.
pub(crate) struct DashboardState {
    pub(crate) series: SeriesController,
    pub(crate) rng: StdRng,
    pub(crate) show_history: bool,
}

impl DashboardState {
    pub(crate) fn mount(
        config: &DashboardConfig,
        settings: &SeriesConfig,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        #[cfg(debug_assertions)]
        if DF.log_series {
            log::info!("dashboard mounted (seed: {:?})", seed);
        }
        Self {
            series: SeriesController::new(config.pnl_multiplier, settings),
            rng,
            show_history: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn landing(now: Duration) -> LandingState {
        LandingState::mount(&LandingContent::default(), &RevealConfig::default(), now)
    }

    #[test]
    fn faq_accordion_keeps_at_most_one_open() {
        let mut state = landing(Duration::ZERO);
        assert_eq!(state.faq_open, None);
        state.toggle_faq(2);
        assert_eq!(state.faq_open, Some(2));
        state.toggle_faq(4);
        assert_eq!(state.faq_open, Some(4));
        state.toggle_faq(4);
        assert_eq!(state.faq_open, None);
    }

    #[test]
    fn anchor_request_is_consumed_once() {
        let mut state = landing(Duration::ZERO);
        state.pending_anchor = Some(LandingAnchor::Pricing);
        assert!(!state.take_anchor(LandingAnchor::Faq));
        assert!(state.take_anchor(LandingAnchor::Pricing));
        assert!(!state.take_anchor(LandingAnchor::Pricing));
    }

    #[test]
    fn landing_wakes_for_first_terminal_char() {
        let state = landing(ms(1000));
        // First line has no start delay: due straight away.
        assert_eq!(state.next_wake(ms(1000)), Some(ms(0)));
    }

    #[test]
    fn unmounted_landing_has_nothing_scheduled() {
        let mut state = landing(Duration::ZERO);
        state.unmount();
        assert_eq!(state.next_wake(ms(10)), None);
        let mut timer = state.hero_stats;
        assert!(!timer.poll(ms(10_000)));
    }

    #[test]
    fn seeded_dashboards_start_identical() {
        use chrono::NaiveDate;

        let config = DashboardConfig::default();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let settings = SeriesConfig::default();
        let mut a = DashboardState::mount(&config, &settings, Some(7));
        let mut b = DashboardState::mount(&config, &settings, Some(7));
        a.series.on_resize(1200.0, today, &mut a.rng);
        b.series.on_resize(1200.0, today, &mut b.rng);
        assert_eq!(a.series.series(), b.series.series());
        assert_eq!(a.series.series().len(), 90);
    }

    #[test]
    fn dashboard_uses_configured_lengths() {
        use chrono::NaiveDate;

        let settings = SeriesConfig {
            narrow_length: 10,
            wide_length: 45,
            ..SeriesConfig::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut state = DashboardState::mount(&DashboardConfig::default(), &settings, Some(1));
        state.series.on_resize(400.0, today, &mut state.rng);
        assert_eq!(state.series.series().len(), 10);
        state.series.on_resize(1200.0, today, &mut state.rng);
        assert_eq!(state.series.series().len(), 45);
    }

    #[test]
    fn landing_counters_use_configured_timing() {
        let timing = RevealConfig {
            counter_duration_ms: 100,
            counter_tick_ms: 10,
            ..RevealConfig::default()
        };
        let mut state = LandingState::mount(&LandingContent::default(), &timing, Duration::ZERO);
        let counter = &mut state.counters[0];
        let target = counter.animator().end_value();
        counter.observe_visibility(true, Duration::ZERO);
        // 100ms / 10ms = 10 ticks, far sooner than the default 1500ms.
        assert!(counter.poll(ms(150)).is_complete);
        assert_eq!(counter.snapshot().current_value, crate::reveal::RevealValue::Number(target));
    }
}
