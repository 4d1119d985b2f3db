use std::time::Duration;

use pickchart::data::loading::{LoadPhase, LoadingGate, ManualClock};

#[test]
fn gate_opens_after_delay() {
    let mut clock = ManualClock::default();
    let mut gate = LoadingGate::start(&clock, Duration::from_millis(3000));
    assert!(gate.is_loading());

    clock.advance(Duration::from_millis(2999));
    assert_eq!(gate.poll(&clock), LoadPhase::Loading);
    assert_eq!(gate.remaining(&clock), Some(Duration::from_millis(1)));

    clock.advance(Duration::from_millis(1));
    assert_eq!(gate.poll(&clock), LoadPhase::Ready);
    assert_eq!(gate.remaining(&clock), None);
}

#[test]
fn zero_delay_is_ready_immediately() {
    let clock = ManualClock::default();
    let gate = LoadingGate::start(&clock, Duration::ZERO);
    assert_eq!(gate.phase(), LoadPhase::Ready);
}

#[test]
fn delay_is_measured_from_start() {
    let mut clock = ManualClock::default();
    clock.set(Duration::from_secs(10));
    let mut gate = LoadingGate::start(&clock, Duration::from_secs(3));
    clock.set(Duration::from_secs(12));
    assert_eq!(gate.poll(&clock), LoadPhase::Loading);
    clock.set(Duration::from_secs(13));
    assert_eq!(gate.poll(&clock), LoadPhase::Ready);
}

#[test]
fn cancelled_gate_never_opens() {
    let mut clock = ManualClock::default();
    let mut gate = LoadingGate::start(&clock, Duration::from_secs(3));
    gate.cancel();
    assert!(gate.is_cancelled());

    clock.advance(Duration::from_secs(60));
    assert_eq!(gate.poll(&clock), LoadPhase::Loading);
    assert_eq!(gate.remaining(&clock), None);
}

#[test]
fn cancel_after_ready_has_no_effect() {
    let mut gate = LoadingGate::ready();
    gate.cancel();
    assert!(!gate.is_cancelled());
    assert_eq!(gate.phase(), LoadPhase::Ready);
}
