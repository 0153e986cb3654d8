use std::time::Duration;

use crate::{
    config::REVEAL,
    reveal::{Animate, RevealPhase, RevealTrigger, RevealValue, ticks_due},
};

/// Reveals `full_text` one character per interval, after an optional start delay.
#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterAnimator {
    full_text: String,
    char_count: usize,
    start_delay: Duration,
    interval: Duration,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypewriterState {
    pub phase: RevealPhase,
    pub ticks: u32,
    /// Characters (not bytes) currently shown.
    pub revealed: usize,
}

impl TypewriterAnimator {
    pub fn new(full_text: impl Into<String>) -> Self {
        let full_text = full_text.into();
        Self {
            char_count: full_text.chars().count(),
            full_text,
            start_delay: Duration::ZERO,
            interval: Duration::from_millis(REVEAL.typewriter_char_ms),
        }
    }

    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Typewriter lines start on their own delay rather than on visibility.
    pub fn trigger(&self) -> RevealTrigger {
        RevealTrigger::AfterDelay(self.start_delay)
    }

    fn completed(&self, ticks: u32) -> TypewriterState {
        TypewriterState {
            phase: RevealPhase::Complete,
            ticks,
            revealed: self.char_count,
        }
    }

    pub fn tick(&self, state: &TypewriterState) -> TypewriterState {
        if state.phase != RevealPhase::Running {
            return state.clone();
        }
        let revealed = (state.revealed + 1).min(self.char_count);
        let ticks = state.ticks + 1;
        if revealed == self.char_count {
            self.completed(ticks)
        } else {
            TypewriterState {
                phase: RevealPhase::Running,
                ticks,
                revealed,
            }
        }
    }

    /// The shown prefix, always cut on a char boundary.
    pub fn visible<'a>(&'a self, state: &TypewriterState) -> &'a str {
        match self.full_text.char_indices().nth(state.revealed) {
            Some((byte_idx, _)) => &self.full_text[..byte_idx],
            None => &self.full_text,
        }
    }
}

impl Animate for TypewriterAnimator {
    type State = TypewriterState;

    fn idle(&self) -> TypewriterState {
        TypewriterState::default()
    }

    fn start(&self) -> TypewriterState {
        if self.char_count == 0 || self.interval.is_zero() {
            return self.completed(0);
        }
        TypewriterState {
            phase: RevealPhase::Running,
            ..TypewriterState::default()
        }
    }

    fn step(&self, state: &TypewriterState, elapsed: Duration) -> TypewriterState {
        let due = ticks_due(elapsed, self.interval);
        let mut next = state.clone();
        while next.phase == RevealPhase::Running && next.ticks < due {
            next = self.tick(&next);
        }
        next
    }

    fn phase(&self, state: &TypewriterState) -> RevealPhase {
        state.phase
    }

    fn ticks(&self, state: &TypewriterState) -> u32 {
        state.ticks
    }

    fn tick_interval(&self) -> Duration {
        self.interval
    }

    fn value(&self, state: &TypewriterState) -> RevealValue {
        RevealValue::Text(self.visible(state).to_owned())
    }

    fn target(&self) -> RevealValue {
        RevealValue::Text(self.full_text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_prefix_chain_until_full() {
        let tw = TypewriterAnimator::new("Bot ready");
        let mut state = tw.start();
        let mut seen = vec![tw.visible(&state).to_owned()];
        while state.phase == RevealPhase::Running {
            state = tw.tick(&state);
            seen.push(tw.visible(&state).to_owned());
        }
        assert_eq!(seen.first().map(String::as_str), Some(""));
        assert_eq!(seen.last().map(String::as_str), Some("Bot ready"));
        for pair in seen.windows(2) {
            assert!(pair[1].starts_with(pair[0].as_str()));
            assert_eq!(pair[1].chars().count(), pair[0].chars().count() + 1);
        }
        assert_eq!(state.ticks, 9);
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let tw = TypewriterAnimator::new("ok ✓");
        let state = tw.step(&tw.start(), Duration::from_millis(150));
        assert_eq!(tw.visible(&state), "ok ");
        let done = tw.step(&state, Duration::from_millis(200));
        assert_eq!(tw.visible(&done), "ok ✓");
        assert_eq!(done.phase, RevealPhase::Complete);
    }

    #[test]
    fn empty_text_completes_on_start() {
        let tw = TypewriterAnimator::new("");
        let state = tw.start();
        assert_eq!(state.phase, RevealPhase::Complete);
        assert_eq!(tw.visible(&state), "");
    }

    #[test]
    fn completion_happens_once() {
        let tw = TypewriterAnimator::new("abc");
        let done = tw.step(&tw.start(), Duration::from_secs(10));
        assert_eq!(done.ticks, 3);
        assert_eq!(tw.tick(&done), done);
        assert_eq!(tw.step(&done, Duration::from_secs(20)), done);
    }

    #[test]
    fn start_delay_becomes_trigger() {
        let tw = TypewriterAnimator::new("x").with_start_delay(Duration::from_millis(2500));
        assert_eq!(tw.trigger(), RevealTrigger::AfterDelay(Duration::from_millis(2500)));
    }
}
