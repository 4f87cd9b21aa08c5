//! Integration tests for the state units
//!
//! These tests verify that:
//! - The event log keeps exactly the most recent N labels in call order
//! - Transient flags revert after their delay and never double-fire
//! - Cancelled flags stay put
//! - Toggles and logs report through a shared dirty flag
//! - Configuration parsed from TOML drives unit construction

use std::time::Duration;

use veneer_core::{
    BoundedEventLog, DirtyFlag, ManualClock, StateConfig, Timestamp, Toggle, TransientStateFlag,
};

/// Every N+k sequence keeps the last min(N, N+k) labels
#[test]
fn test_log_keeps_most_recent_labels() {
    for capacity in 1..=5usize {
        for extra in 0..=6usize {
            let clock = ManualClock::shared();
            let mut log = BoundedEventLog::new(capacity, clock);

            let labels: Vec<String> = (0..capacity + extra).map(|i| format!("event-{i}")).collect();
            for label in &labels {
                log.record(label.clone());
                assert!(log.len() <= capacity);
            }

            let expected = labels[labels.len() - capacity..].to_vec();
            assert_eq!(log.snapshot(), expected, "capacity={capacity} extra={extra}");
        }
    }
}

#[test]
fn test_log_shorter_than_capacity() {
    let mut log = BoundedEventLog::new(3, ManualClock::shared());
    log.record("A");
    assert_eq!(log.snapshot(), vec!["A"]);
}

#[test]
fn test_clear_always_empties() {
    let mut log = BoundedEventLog::new(3, ManualClock::shared());
    log.clear();
    assert!(log.snapshot().is_empty());

    log.record("A");
    log.record("B");
    log.clear();
    assert!(log.snapshot().is_empty());

    // Still usable afterwards
    log.record("C");
    assert_eq!(log.snapshot(), vec!["C"]);
}

#[test]
fn test_capacity_three_scenario() {
    let mut log = BoundedEventLog::new(3, ManualClock::shared());
    log.record("A");
    log.record("B");
    log.record("C");
    log.record("D");
    assert_eq!(log.snapshot(), vec!["B", "C", "D"]);
}

/// Re-triggering moves the deadline instead of stacking a second reversion
#[test]
fn test_retrigger_extends_deadline() {
    let clock = ManualClock::shared();
    let mut flag = TransientStateFlag::new(clock.clone());
    let delay = Duration::from_millis(2000);

    flag.trigger(delay);
    assert!(flag.is_active());

    // No frame ran between the first deadline and the re-trigger
    clock.set(Timestamp::from_millis(2050));
    flag.trigger(delay);

    clock.set(Timestamp::from_millis(2100));
    assert!(!flag.tick());
    assert!(flag.is_active());

    clock.set(Timestamp::from_millis(4049));
    assert!(!flag.tick());
    assert!(flag.is_active());

    clock.set(Timestamp::from_millis(4150));
    assert!(flag.tick());
    assert!(!flag.is_active());

    // Only one reversion ever fires
    clock.set(Timestamp::from_millis(10_000));
    assert!(!flag.tick());
}

#[test]
fn test_single_trigger_reverts_after_delay() {
    let clock = ManualClock::shared();
    let mut flag = TransientStateFlag::new(clock.clone());

    flag.trigger(Duration::from_millis(2000));
    assert!(flag.is_active());

    // Observable before any frame ticks
    clock.set(Timestamp::from_millis(2100));
    assert!(!flag.is_active());

    assert!(flag.tick());
    assert!(!flag.is_active());
}

#[test]
fn test_cancel_prevents_reversion() {
    let clock = ManualClock::shared();
    let mut flag = TransientStateFlag::new(clock.clone());

    flag.trigger(Duration::from_millis(2000));
    flag.cancel();

    clock.advance(Duration::from_millis(5000));
    assert!(!flag.tick());
    assert!(flag.is_active());

    // A later trigger arms a fresh timer
    flag.trigger(Duration::from_millis(100));
    clock.advance(Duration::from_millis(100));
    assert!(flag.tick());
    assert!(!flag.is_active());
}

#[test]
fn test_toggle_twice_from_true() {
    let mut toggle = Toggle::new(true);
    let sequence = [toggle.get(), toggle.toggle(), toggle.toggle()];
    assert_eq!(sequence, [true, false, true]);
}

/// Units owned by one view share its dirty flag
#[test]
fn test_units_share_dirty_flag() {
    let clock = ManualClock::shared();
    let dirty = DirtyFlag::new();

    let mut log = BoundedEventLog::new(3, clock.clone()).with_render_callback(dirty.callback());
    let mut flag = TransientStateFlag::new(clock.clone()).with_render_callback(dirty.callback());
    let mut toggle = Toggle::new(false).with_render_callback(dirty.callback());

    log.record("Added item");
    assert!(dirty.take());

    flag.trigger_default();
    assert!(dirty.take());

    toggle.toggle();
    assert!(dirty.take());

    clock.advance(flag.delay());
    assert!(flag.tick());
    assert!(dirty.take());
}

#[test]
fn test_config_from_toml() {
    let config: StateConfig = toml::from_str(
        r#"
        [event_log]
        capacity = 5

        [transient]
        delay_ms = 750
        "#,
    )
    .unwrap();
    config.validate().unwrap();

    let clock = ManualClock::shared();
    let mut log = BoundedEventLog::new(config.event_log.capacity, clock.clone());
    for i in 0..8 {
        log.record(format!("{i}"));
    }
    assert_eq!(log.snapshot(), vec!["3", "4", "5", "6", "7"]);

    let mut flag = TransientStateFlag::new(clock.clone()).with_delay(config.transient.delay());
    flag.trigger_default();
    clock.advance(Duration::from_millis(750));
    assert!(flag.tick());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config: StateConfig = toml::from_str("").unwrap();
    assert_eq!(config, StateConfig::default());
}
