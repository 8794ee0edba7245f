//! Event primitives for the HSM engine
//!
//! Events are lightweight value types identified by a [`Signal`] and
//! carrying an optional small scalar payload (a key id, an encoder
//! delta). Event queues store them by value, so payloads stay `Copy`.

use core::fmt;

use crate::Signal;

/// A dispatchable event: a signal plus an optional scalar payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Event signal identifier
    pub signal: Signal,
    /// Optional payload supplied by the producer
    pub payload: Option<u16>,
}

impl Event {
    /// Create a new event without payload
    pub const fn new(signal: Signal) -> Self {
        Self {
            signal,
            payload: None,
        }
    }

    /// Create a new event carrying a payload
    pub const fn with_payload(signal: Signal, payload: u16) -> Self {
        Self {
            signal,
            payload: Some(payload),
        }
    }

    /// Get the signal identifier for this event
    pub const fn signal(&self) -> Signal {
        self.signal
    }

    /// Check if this is a reserved control event
    pub const fn is_reserved(&self) -> bool {
        self.signal.is_reserved()
    }
}

impl From<Signal> for Event {
    fn from(signal: Signal) -> Self {
        Self::new(signal)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            Some(p) => write!(f, "{}[{}]", self.signal, p),
            None => write!(f, "{}", self.signal),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Event {
    fn format(&self, fmt: defmt::Formatter) {
        match self.payload {
            Some(p) => defmt::write!(fmt, "{}[{}]", self.signal, p),
            None => defmt::write!(fmt, "{}", self.signal),
        }
    }
}
