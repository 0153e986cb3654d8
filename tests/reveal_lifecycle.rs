//! Integration tests: reveal animations driven through the public mount/poll/unmount API
//! with a logical clock, the way the UI drives them frame by frame.

use std::time::Duration;

use tradebot_site::{
    CounterAnimator, Reveal, RevealTrigger, RevealValue, TypewriterAnimator,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn number(value: &RevealValue) -> f64 {
    match value {
        RevealValue::Number(n) => *n,
        RevealValue::Text(t) => panic!("expected a number, got text {:?}", t),
    }
}

fn text(value: &RevealValue) -> String {
    match value {
        RevealValue::Text(t) => t.clone(),
        RevealValue::Number(n) => panic!("expected text, got number {}", n),
    }
}

/// Polls every 16ms from `from` until `until` (inclusive), collecting displayed numbers.
fn sample_counter(
    reveal: &mut Reveal<CounterAnimator>,
    from: u64,
    until: u64,
) -> Vec<f64> {
    (from..=until)
        .step_by(16)
        .map(|t| number(&reveal.poll(ms(t)).current_value))
        .collect()
}

#[test]
fn counter_reaches_exact_target_after_94_ticks() {
    let animator = CounterAnimator::new(5000.0).with_timing(ms(1500), ms(16));
    let mut reveal = Reveal::mount(animator, RevealTrigger::OnVisible, ms(0));

    // Offscreen frames do nothing.
    reveal.observe_visibility(false, ms(0));
    assert!(!reveal.poll(ms(500)).is_triggered);

    reveal.observe_visibility(true, ms(1000));
    let values = sample_counter(&mut reveal, 1000, 1000 + 93 * 16);
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "non-decreasing");
    assert!(values.iter().all(|v| *v < 5000.0), "no early completion");

    let state = reveal.poll(ms(1000 + 94 * 16));
    assert!(state.is_complete);
    assert_eq!(number(&state.current_value), 5000.0);
    assert_eq!(reveal.next_wake(ms(1000 + 94 * 16)), None);
}

#[test]
fn counter_final_value_is_exact_for_awkward_targets() {
    for end in [1.0, 7.0, 98.0, 24.0, 333.0, 12_345.0] {
        let mut reveal = Reveal::mount(CounterAnimator::new(end), RevealTrigger::OnVisible, ms(0));
        reveal.observe_visibility(true, ms(0));
        let mut last = 0.0;
        for t in (0..=2_000).step_by(16) {
            let value = number(&reveal.poll(ms(t)).current_value);
            assert!(value >= last && value <= end);
            last = value;
        }
        assert_eq!(last, end);
    }
}

#[test]
fn zero_target_completes_without_ticks() {
    let mut reveal = Reveal::mount(CounterAnimator::new(0.0), RevealTrigger::OnVisible, ms(0));
    reveal.observe_visibility(true, ms(0));
    let state = reveal.poll(ms(0));
    assert!(state.is_complete);
    assert_eq!(number(&state.current_value), 0.0);
    assert_eq!(reveal.next_wake(ms(0)), None);
}

#[test]
fn unmount_mid_animation_freezes_the_value() {
    let mut reveal = Reveal::mount(CounterAnimator::new(5000.0), RevealTrigger::OnVisible, ms(0));
    reveal.observe_visibility(true, ms(0));
    let at_tick_10 = reveal.poll(ms(10 * 16));
    assert!(!at_tick_10.is_complete);

    reveal.unmount();
    reveal.unmount();
    assert!(reveal.is_unmounted());
    for t in [200, 1_000, 60_000] {
        assert_eq!(reveal.poll(ms(t)), at_tick_10);
    }
    assert_eq!(reveal.next_wake(ms(200)), None);
}

#[test]
fn visibility_trigger_fires_once_per_mount() {
    let mut reveal = Reveal::mount(CounterAnimator::new(98.0), RevealTrigger::OnVisible, ms(0));
    reveal.observe_visibility(true, ms(0));
    reveal.poll(ms(5_000));
    // Leaving and re-entering the viewport does not replay.
    reveal.observe_visibility(false, ms(5_100));
    reveal.observe_visibility(true, ms(5_200));
    let state = reveal.poll(ms(5_216));
    assert!(state.is_complete);
    assert_eq!(number(&state.current_value), 98.0);
}

#[test]
fn typewriter_reveals_prefixes_after_its_delay() {
    let full = "Connecting to Solana mainnet...";
    let animator = TypewriterAnimator::new(full)
        .with_start_delay(ms(1000))
        .with_interval(ms(50));
    let trigger = animator.trigger();
    let mut reveal = Reveal::mount(animator, trigger, ms(0));

    assert!(!reveal.poll(ms(999)).is_triggered);
    assert_eq!(reveal.next_wake(ms(999)), Some(ms(1)));

    let mut previous = String::new();
    for t in (1000..=1000 + 50 * full.chars().count() as u64).step_by(10) {
        let shown = text(&reveal.poll(ms(t)).current_value);
        assert!(full.starts_with(&shown));
        assert!(shown.len() >= previous.len());
        previous = shown;
    }
    assert_eq!(previous, full);
    assert!(reveal.snapshot().is_complete);
}

#[test]
fn stalled_frame_jumps_to_final_value() {
    let animator = TypewriterAnimator::new("Bot ready for trading ✓").with_interval(ms(50));
    let mut reveal = Reveal::mount(animator, RevealTrigger::AfterDelay(ms(0)), ms(0));
    let state = reveal.poll(ms(3_600_000));
    assert!(state.is_complete);
    assert_eq!(text(&state.current_value), "Bot ready for trading ✓");
}

#[test]
fn retarget_restarts_from_idle() {
    let mut reveal = Reveal::mount(CounterAnimator::new(100.0), RevealTrigger::OnVisible, ms(0));
    reveal.observe_visibility(true, ms(0));
    reveal.poll(ms(320));

    reveal.retarget(CounterAnimator::new(40.0), ms(400));
    let state = reveal.poll(ms(400));
    assert!(!state.is_triggered);
    assert_eq!(number(&state.current_value), 0.0);

    reveal.observe_visibility(true, ms(400));
    let state = reveal.poll(ms(2_000));
    assert_eq!(number(&state.current_value), 40.0);
}
