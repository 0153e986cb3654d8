use std::time::Duration;

use crate::{
    config::DF,
    reveal::{Animate, RevealPhase, RevealTrigger, RevealValue, VisibilityLatch},
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Lifecycle {
    Armed { mounted_at: Duration },
    Running { started_at: Duration },
    Complete,
    Unmounted,
}

/// Snapshot read by the presentation layer each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    pub current_value: RevealValue,
    pub is_triggered: bool,
    pub is_complete: bool,
}

/// A mounted reveal: animator + trigger + lifecycle.
///
/// All methods take `now`, a logical timestamp (any fixed origin). Ticks are applied
/// lazily in [`Reveal::poll`]; [`Reveal::next_wake`] tells the caller when the next
/// visible change is due so it can schedule a repaint. After [`Reveal::unmount`] the
/// value is frozen and no further changes can be observed.
#[derive(Debug)]
pub struct Reveal<A: Animate> {
    animator: A,
    trigger: RevealTrigger,
    lifecycle: Lifecycle,
    state: A::State,
    latch: VisibilityLatch,
    triggered: bool,
}

impl<A: Animate> Reveal<A> {
    pub fn mount(animator: A, trigger: RevealTrigger, now: Duration) -> Self {
        let state = animator.idle();
        Self {
            animator,
            trigger,
            lifecycle: Lifecycle::Armed { mounted_at: now },
            state,
            latch: VisibilityLatch::default(),
            triggered: false,
        }
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animation_state(&self) -> &A::State {
        &self.state
    }

    pub fn is_unmounted(&self) -> bool {
        self.lifecycle == Lifecycle::Unmounted
    }

    /// Feeds the visibility signal. Only an `OnVisible` reveal that is still armed reacts,
    /// and only on the first visible frame.
    pub fn observe_visibility(&mut self, visible: bool, now: Duration) {
        if self.trigger != RevealTrigger::OnVisible {
            return;
        }
        if !matches!(self.lifecycle, Lifecycle::Armed { .. }) {
            return;
        }
        if self.latch.observe(visible) {
            self.fire(now);
        }
    }

    fn fire(&mut self, started_at: Duration) {
        self.triggered = true;
        self.state = self.animator.start();
        self.lifecycle = match self.animator.phase(&self.state) {
            RevealPhase::Complete => Lifecycle::Complete,
            _ => Lifecycle::Running { started_at },
        };
        #[cfg(debug_assertions)]
        if DF.log_reveal {
            log::info!("reveal triggered at {:?} -> {:?}", started_at, self.lifecycle);
        }
    }

    /// Advances to `now` and returns the current snapshot.
    pub fn poll(&mut self, now: Duration) -> RevealState {
        if let Lifecycle::Armed { mounted_at } = self.lifecycle {
            if let RevealTrigger::AfterDelay(delay) = self.trigger {
                let due_at = mounted_at + delay;
                if now >= due_at {
                    // Start on the scheduled instant, not the frame that noticed it.
                    self.fire(due_at);
                }
            }
        }

        if let Lifecycle::Running { started_at } = self.lifecycle {
            let elapsed = now.saturating_sub(started_at);
            self.state = self.animator.step(&self.state, elapsed);
            if self.animator.phase(&self.state) == RevealPhase::Complete {
                self.lifecycle = Lifecycle::Complete;
            }
        }

        self.snapshot()
    }

    /// Current snapshot without advancing time.
    pub fn snapshot(&self) -> RevealState {
        RevealState {
            current_value: self.animator.value(&self.state),
            is_triggered: self.triggered,
            is_complete: self.animator.phase(&self.state) == RevealPhase::Complete,
        }
    }

    /// Time until the next scheduled change, `None` if nothing is scheduled
    /// (waiting on visibility, finished, or unmounted).
    pub fn next_wake(&self, now: Duration) -> Option<Duration> {
        match self.lifecycle {
            Lifecycle::Armed { mounted_at } => match self.trigger {
                RevealTrigger::AfterDelay(delay) => Some((mounted_at + delay).saturating_sub(now)),
                RevealTrigger::OnVisible => None,
            },
            Lifecycle::Running { started_at } => {
                let interval = self.animator.tick_interval();
                let next_tick = self.animator.ticks(&self.state).saturating_add(1);
                let due_at = started_at.saturating_add(interval.saturating_mul(next_tick));
                Some(due_at.saturating_sub(now))
            }
            Lifecycle::Complete | Lifecycle::Unmounted => None,
        }
    }

    /// Cancels anything pending. Safe to call any number of times.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        #[cfg(debug_assertions)]
        if DF.log_reveal && matches!(self.lifecycle, Lifecycle::Running { .. }) {
            log::info!(
                "reveal unmounted mid-animation after {} ticks",
                self.animator.ticks(&self.state)
            );
        }
        self.lifecycle = Lifecycle::Unmounted;
    }

    /// Swaps in a new target. An unfinished animation is cancelled and re-armed from
    /// Idle; a finished one restarts too so the new value is animated in. No-op after
    /// unmount.
    pub fn retarget(&mut self, animator: A, now: Duration) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.state = animator.idle();
        self.animator = animator;
        self.latch = VisibilityLatch::default();
        self.triggered = false;
        self.lifecycle = Lifecycle::Armed { mounted_at: now };
    }
}

impl<A: Animate> Drop for Reveal<A> {
    fn drop(&mut self) {
        self.unmount();
    }
}
