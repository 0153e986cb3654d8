//! Reveal animations: counters that count up to a target and typewriter text.
//!
//! Both animators are plain state machines `{Idle, Running, Complete}` advanced by a
//! pure step function `(state, elapsed) -> state`. No timers live in here; the caller
//! supplies logical time (egui frame time in the app, literal durations in tests).
//! [`Reveal`] owns one animator plus its trigger and mount/unmount lifecycle.

mod counter;
mod driver;
mod trigger;
mod typewriter;

use std::time::Duration;

pub use counter::{CounterAnimator, CounterState};
pub use driver::{Reveal, RevealState};
pub use trigger::{OneShotTimer, RevealTrigger, VisibilityLatch};
pub use typewriter::{TypewriterAnimator, TypewriterState};

pub type CounterReveal = Reveal<CounterAnimator>;
pub type TypewriterReveal = Reveal<TypewriterAnimator>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Idle,
    Running,
    Complete,
}

/// What the presentation layer shows for a reveal: a number or a prefix of the text.
#[derive(Debug, Clone, PartialEq)]
pub enum RevealValue {
    Number(f64),
    Text(String),
}

/// Common surface of the two animators so [`Reveal`] can drive either one.
pub trait Animate {
    type State: Clone + std::fmt::Debug;

    /// Untriggered state.
    fn idle(&self) -> Self::State;

    /// Transition taken when the trigger fires. May go straight to `Complete`
    /// when there is nothing to animate.
    fn start(&self) -> Self::State;

    /// Applies every tick that is due `elapsed` after the trigger fired.
    fn step(&self, state: &Self::State, elapsed: Duration) -> Self::State;

    fn phase(&self, state: &Self::State) -> RevealPhase;

    /// Ticks applied so far.
    fn ticks(&self, state: &Self::State) -> u32;

    fn tick_interval(&self) -> Duration;

    fn value(&self, state: &Self::State) -> RevealValue;

    /// Final value, used when the animation has to be skipped.
    fn target(&self) -> RevealValue;
}

/// Number of ticks due after `elapsed`, given a non-zero `interval`.
pub(crate) fn ticks_due(elapsed: Duration, interval: Duration) -> u32 {
    let interval_ms = interval.as_millis();
    if interval_ms == 0 {
        return u32::MAX;
    }
    u32::try_from(elapsed.as_millis() / interval_ms).unwrap_or(u32::MAX)
}
