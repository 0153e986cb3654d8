use std::time::Duration;

use crate::{
    config::REVEAL,
    reveal::{Animate, RevealPhase, RevealValue, ticks_due},
    utils::format_thousands,
};

/// Counts a displayed number up from 0 to `end_value`.
///
/// Each tick adds `end_value / (duration / tick)` to an accumulator and shows its floor.
/// The tick that reaches or passes `end_value` shows exactly `end_value` and completes,
/// so float overshoot never reaches the display.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimator {
    end_value: f64,
    duration: Duration,
    tick: Duration,
    suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterState {
    pub phase: RevealPhase,
    pub ticks: u32,
    pub accumulator: f64,
    pub displayed: f64,
}

impl CounterAnimator {
    pub fn new(end_value: f64) -> Self {
        Self {
            // f64::max also maps NaN to 0.0
            end_value: end_value.max(0.0),
            duration: Duration::from_millis(REVEAL.counter_duration_ms),
            tick: Duration::from_millis(REVEAL.counter_tick_ms),
            suffix: None,
        }
    }

    pub fn with_timing(mut self, duration: Duration, tick: Duration) -> Self {
        self.duration = duration;
        self.tick = tick;
        self
    }

    pub fn with_suffix(mut self, suffix: Option<impl Into<String>>) -> Self {
        self.suffix = suffix.map(Into::into);
        self
    }

    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Per-tick increment, or `None` when there is nothing to animate
    /// (zero target, zero tick, or a duration shorter than one tick).
    pub fn increment(&self) -> Option<f64> {
        let tick_ms = self.tick.as_millis();
        let duration_ms = self.duration.as_millis();
        if self.end_value <= 0.0 || tick_ms == 0 || duration_ms < tick_ms {
            return None;
        }
        let steps = duration_ms as f64 / tick_ms as f64;
        Some(self.end_value / steps)
    }

    fn completed(&self, ticks: u32, accumulator: f64) -> CounterState {
        CounterState {
            phase: RevealPhase::Complete,
            ticks,
            accumulator,
            displayed: self.end_value,
        }
    }

    /// One tick of the running machine. Idle and Complete states are returned unchanged.
    pub fn tick(&self, state: &CounterState) -> CounterState {
        if state.phase != RevealPhase::Running {
            return state.clone();
        }
        let Some(increment) = self.increment() else {
            return self.completed(state.ticks, state.accumulator);
        };

        let accumulator = state.accumulator + increment;
        let ticks = state.ticks + 1;
        if accumulator >= self.end_value {
            self.completed(ticks, accumulator)
        } else {
            CounterState {
                phase: RevealPhase::Running,
                ticks,
                accumulator,
                displayed: accumulator.floor(),
            }
        }
    }

    /// Display string: thousands-grouped integer plus the optional suffix.
    pub fn format(&self, state: &CounterState) -> String {
        format!(
            "{}{}",
            format_thousands(state.displayed, 0),
            self.suffix.as_deref().unwrap_or_default()
        )
    }
}

impl Animate for CounterAnimator {
    type State = CounterState;

    fn idle(&self) -> CounterState {
        CounterState::default()
    }

    fn start(&self) -> CounterState {
        match self.increment() {
            Some(_) => CounterState {
                phase: RevealPhase::Running,
                ..CounterState::default()
            },
            None => self.completed(0, 0.0),
        }
    }

    fn step(&self, state: &CounterState, elapsed: Duration) -> CounterState {
        let due = ticks_due(elapsed, self.tick);
        let mut next = state.clone();
        while next.phase == RevealPhase::Running && next.ticks < due {
            next = self.tick(&next);
        }
        next
    }

    fn phase(&self, state: &CounterState) -> RevealPhase {
        state.phase
    }

    fn ticks(&self, state: &CounterState) -> u32 {
        state.ticks
    }

    fn tick_interval(&self) -> Duration {
        self.tick
    }

    fn value(&self, state: &CounterState) -> RevealValue {
        RevealValue::Number(state.displayed)
    }

    fn target(&self) -> RevealValue {
        RevealValue::Number(self.end_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn five_thousand_completes_on_tick_94() {
        let counter = CounterAnimator::new(5000.0).with_timing(ms(1500), ms(16));
        let mut state = counter.start();
        let mut previous = 0.0;
        while state.phase == RevealPhase::Running {
            state = counter.tick(&state);
            assert!(state.displayed >= previous);
            assert!(state.displayed <= 5000.0);
            if state.phase == RevealPhase::Running {
                assert!(state.displayed < 5000.0);
            }
            previous = state.displayed;
        }
        assert_eq!(state.ticks, 94);
        assert_eq!(state.displayed, 5000.0);
    }

    #[test]
    fn zero_target_skips_animation() {
        let counter = CounterAnimator::new(0.0);
        let state = counter.start();
        assert_eq!(state.phase, RevealPhase::Complete);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.displayed, 0.0);
    }

    #[test]
    fn degenerate_timing_shows_target_immediately() {
        let zero_tick = CounterAnimator::new(42.0).with_timing(ms(1500), ms(0));
        assert_eq!(zero_tick.start().displayed, 42.0);

        let too_short = CounterAnimator::new(42.0).with_timing(ms(10), ms(16));
        let state = too_short.start();
        assert_eq!(state.phase, RevealPhase::Complete);
        assert_eq!(state.displayed, 42.0);
    }

    #[test]
    fn step_applies_only_due_ticks() {
        let counter = CounterAnimator::new(5000.0).with_timing(ms(1500), ms(16));
        let running = counter.start();

        let early = counter.step(&running, ms(15));
        assert_eq!(early.ticks, 0);
        assert_eq!(early.displayed, 0.0);

        let later = counter.step(&running, ms(160));
        assert_eq!(later.ticks, 10);
        assert_eq!(later.displayed, (10.0 * 5000.0 / 93.75_f64).floor());
    }

    #[test]
    fn stalled_frame_lands_on_final_value() {
        let counter = CounterAnimator::new(98.0);
        let done = counter.step(&counter.start(), Duration::from_secs(3600));
        assert_eq!(done.phase, RevealPhase::Complete);
        assert_eq!(done.displayed, 98.0);
    }

    #[test]
    fn idle_state_never_ticks() {
        let counter = CounterAnimator::new(24.0);
        let idle = counter.idle();
        assert_eq!(counter.tick(&idle), idle);
        assert_eq!(counter.step(&idle, ms(10_000)), idle);
    }

    #[test]
    fn formats_with_grouping_and_suffix() {
        let counter = CounterAnimator::new(5000.0);
        let done = counter.step(&counter.start(), ms(5000));
        assert_eq!(counter.format(&done), "5,000");

        let pct = CounterAnimator::new(98.0).with_suffix(Some("%"));
        let done = pct.step(&pct.start(), ms(5000));
        assert_eq!(pct.format(&done), "98%");
    }
}
