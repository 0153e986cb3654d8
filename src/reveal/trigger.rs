use std::time::Duration;

/// What starts a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    /// First time the widget enters the viewport.
    OnVisible,
    /// Fixed delay measured from mount.
    AfterDelay(Duration),
}

/// Turns a per-frame "is visible" signal into a single rising edge.
///
/// Fires at most once; leaving and re-entering the viewport does not fire again.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityLatch {
    fired: bool,
}

impl VisibilityLatch {
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// One-shot deferred timer: fires once `delay` after it was armed, unless cancelled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShotTimer {
    due_at: Duration,
    fired: bool,
    cancelled: bool,
}

impl OneShotTimer {
    pub fn arm(now: Duration, delay: Duration) -> Self {
        Self {
            due_at: now.saturating_add(delay),
            fired: false,
            cancelled: false,
        }
    }

    /// True from the first poll at or after the due time. Stays true once fired.
    pub fn poll(&mut self, now: Duration) -> bool {
        if !self.cancelled && !self.fired && now >= self.due_at {
            self.fired = true;
        }
        self.fired
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Time left before firing, `None` once fired or cancelled.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        if self.fired || self.cancelled {
            return None;
        }
        Some(self.due_at.saturating_sub(now))
    }

    /// No-op if already fired or cancelled.
    pub fn cancel(&mut self) {
        if !self.fired {
            self.cancelled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_at_due_time() {
        let mut timer = OneShotTimer::arm(Duration::from_millis(100), Duration::from_millis(2500));
        assert!(!timer.poll(Duration::from_millis(2599)));
        assert_eq!(timer.remaining(Duration::from_millis(2599)), Some(Duration::from_millis(1)));
        assert!(timer.poll(Duration::from_millis(2600)));
        assert!(timer.poll(Duration::from_millis(9000)));
        assert_eq!(timer.remaining(Duration::from_millis(9000)), None);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = OneShotTimer::arm(Duration::ZERO, Duration::from_millis(10));
        timer.cancel();
        timer.cancel();
        assert!(!timer.poll(Duration::from_secs(1)));
        assert_eq!(timer.remaining(Duration::ZERO), None);
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.has_fired());
    }
}
