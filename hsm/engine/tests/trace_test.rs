//! Trace hook integration test
//!
//! Runs as a single test because the trace configuration is
//! process-wide.

use std::sync::Mutex;

use hsm_core::{root, Event, HandlerResult, Signal, StateMachine};
use hsm_engine::{trace, Hsm, TracePoint};
use hsm_instance::{impl_state_machine, StateCell};

const SIG_PING: Signal = Signal::new(5);
const SIG_TICK: Signal = Signal::new(6);

static SEEN: Mutex<Vec<u16>> = Mutex::new(Vec::new());

fn collect(point: &TracePoint) {
    let TracePoint::Dispatch { signal, .. } = *point;
    SEEN.lock().unwrap().push(signal.raw());
}

struct Pinger {
    cell: StateCell<Pinger>,
    pings: u32,
}

impl_state_machine!(Pinger, cell);

fn active(m: &mut Pinger, e: &Event) -> HandlerResult {
    match e.signal {
        Signal::ENTRY | Signal::EXIT | Signal::INITIAL => HandlerResult::Handled,
        sig if sig == SIG_PING => {
            m.pings += 1;
            HandlerResult::Handled
        }
        sig if sig == SIG_TICK => HandlerResult::Handled,
        _ => {
            m.set_handler(root);
            HandlerResult::Super
        }
    }
}

#[test]
fn hook_sees_dispatches_with_filtered_signals_suppressed() {
    let mut m = Pinger {
        cell: StateCell::new(),
        pings: 0,
    };
    m.set_initial_state(active);

    trace::set_hook(collect);
    assert!(trace::filter_signal(SIG_TICK));

    m.post(SIG_PING).unwrap();
    m.post(SIG_TICK).unwrap();
    m.post(SIG_PING).unwrap();
    m.process();

    let pings_seen = || {
        SEEN.lock()
            .unwrap()
            .iter()
            .filter(|s| **s == SIG_PING.raw())
            .count()
    };
    let ticks_seen = || {
        SEEN.lock()
            .unwrap()
            .iter()
            .filter(|s| **s == SIG_TICK.raw())
            .count()
    };

    assert_eq!(pings_seen(), 2, "both PING dispatches traced");
    assert_eq!(ticks_seen(), 0, "TICK suppressed by the filter");
    assert_eq!(m.pings, 2);

    // Muting keeps the hook installed but stops emission
    trace::set_enabled(false);
    m.post(SIG_PING).unwrap();
    m.process();
    assert_eq!(pings_seen(), 2, "muted dispatch not traced");

    trace::set_enabled(true);
    m.post(SIG_PING).unwrap();
    m.process();
    assert_eq!(pings_seen(), 3, "unmuted dispatch traced again");

    trace::clear_hook();
    trace::clear_filter();

    // Dispatches after clear_hook are not observed
    let before = SEEN.lock().unwrap().len();
    m.post(SIG_PING).unwrap();
    m.process();
    assert_eq!(SEEN.lock().unwrap().len(), before);
    assert_eq!(m.pings, 5);
}
