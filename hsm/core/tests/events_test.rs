//! Event and signal tests for hsm-core
//! These tests run on x86 host with std for testing, but verify no_std compatible code

use hsm_core::{Event, Signal};

#[test]
fn test_reserved_signal_identities() {
    assert_eq!(Signal::NONE.raw(), 0);
    assert_eq!(Signal::SILENT.raw(), 1);
    assert_eq!(Signal::ENTRY.raw(), 2);
    assert_eq!(Signal::EXIT.raw(), 3);
    assert_eq!(Signal::INITIAL.raw(), 4);
    assert_eq!(Signal::USER.raw(), 5);
}

#[test]
fn test_reserved_range() {
    assert!(Signal::SILENT.is_reserved());
    assert!(Signal::INITIAL.is_reserved());
    assert!(!Signal::USER.is_reserved());
    assert!(!Signal::new(42).is_reserved());
}

#[test]
fn test_signal_equality() {
    let sig1 = Signal::new(42);
    let sig2 = Signal::new(42);
    assert_eq!(sig1, sig2);
    assert_ne!(sig1, Signal::new(43));
}

#[test]
fn test_event_carries_signal() {
    let event = Event::new(Signal::new(10));
    assert_eq!(event.signal(), Signal::new(10));
    assert_eq!(event.payload, None);
}

#[test]
fn test_event_reserved_follows_signal() {
    assert!(Event::new(Signal::ENTRY).is_reserved());
    assert!(Event::new(Signal::SILENT).is_reserved());
    assert!(!Event::new(Signal::USER).is_reserved());
    assert!(!Event::with_payload(Signal::new(42), 1).is_reserved());
}

#[test]
fn test_event_payload() {
    let event = Event::with_payload(Signal::new(10), 7);
    assert_eq!(event.payload, Some(7));
    assert_eq!(Event::from(Signal::new(10)).signal(), event.signal());
}
