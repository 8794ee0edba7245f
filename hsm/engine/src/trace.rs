//! Advisory dispatch tracing
//!
//! A process-wide hook observing every logged handler invocation, with
//! a bounded suppress-filter of signal ids (high-rate signals such as a
//! system tick are the usual entries). Purely advisory: the engine's
//! behavior never depends on it.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Vec;
use hsm_core::{HandlerResult, Signal};

/// Maximum number of signals the suppress filter can hold
pub const MAX_FILTERED_SIGNALS: usize = 8;

/// A point in the dispatch stream handed to the trace hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracePoint {
    /// One handler invocation
    Dispatch {
        /// Signal that was dispatched
        signal: Signal,
        /// Handler address; states are identified by handler identity
        state: usize,
        /// How the handler answered
        result: HandlerResult,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for TracePoint {
    fn format(&self, fmt: defmt::Formatter) {
        let TracePoint::Dispatch {
            signal,
            state,
            result,
        } = *self;
        defmt::write!(fmt, "{} to {=usize:x}: {}", signal, state, result);
    }
}

/// Trace hook function pointer
pub type TraceHook = fn(&TracePoint);

struct TraceConfig {
    hook: Option<TraceHook>,
    enabled: bool,
    filter: Vec<Signal, MAX_FILTERED_SIGNALS>,
}

impl TraceConfig {
    const fn new() -> Self {
        Self {
            hook: None,
            enabled: true,
            filter: Vec::new(),
        }
    }
}

static TRACE: Mutex<RefCell<TraceConfig>> = Mutex::new(RefCell::new(TraceConfig::new()));

/// Install the process-wide trace hook
pub fn set_hook(hook: TraceHook) {
    critical_section::with(|cs| {
        TRACE.borrow_ref_mut(cs).hook = Some(hook);
    });
}

/// Remove the trace hook
pub fn clear_hook() {
    critical_section::with(|cs| {
        TRACE.borrow_ref_mut(cs).hook = None;
    });
}

/// Enable or mute tracing without touching the hook
pub fn set_enabled(enabled: bool) {
    critical_section::with(|cs| {
        TRACE.borrow_ref_mut(cs).enabled = enabled;
    });
}

/// Suppress a signal from the trace stream
///
/// Returns `false` if the filter is already full.
pub fn filter_signal(signal: Signal) -> bool {
    critical_section::with(|cs| TRACE.borrow_ref_mut(cs).filter.push(signal).is_ok())
}

/// Drop all suppress-filter entries
pub fn clear_filter() {
    critical_section::with(|cs| {
        TRACE.borrow_ref_mut(cs).filter.clear();
    });
}

/// Emit a trace point to the hook, honoring the filter
pub(crate) fn emit(point: &TracePoint) {
    let TracePoint::Dispatch { signal, .. } = *point;
    critical_section::with(|cs| {
        let config = TRACE.borrow_ref(cs);
        if !config.enabled || config.filter.contains(&signal) {
            return;
        }
        #[cfg(feature = "defmt")]
        {
            defmt::trace!("dispatch {}", point);
        }
        if let Some(hook) = config.hook {
            hook(point);
        }
    });
}
