//! Handler contract and state machine abstraction
//!
//! A state is a handler function; handler identity is state identity.
//! Transitions are expressed in-band: the handler writes the next
//! handler into the machine with [`StateMachine::set_handler`] before
//! returning [`HandlerResult::Changed`] or [`HandlerResult::Super`].

use crate::{Event, HsmResult, Signal};

/// State handler return codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResult {
    /// Event not for this state; no action taken
    Ignored,
    /// Event consumed in this state
    Handled,
    /// Transition requested; the handler has set the target handler
    Changed,
    /// Delegate upward; the handler has set the superstate handler
    Super,
}

impl HandlerResult {
    /// Check if the handler delegated to its superstate
    pub fn is_super(&self) -> bool {
        matches!(self, HandlerResult::Super)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HandlerResult {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            HandlerResult::Ignored => defmt::write!(fmt, "Ignored"),
            HandlerResult::Handled => defmt::write!(fmt, "Handled"),
            HandlerResult::Changed => defmt::write!(fmt, "Changed"),
            HandlerResult::Super => defmt::write!(fmt, "Super"),
        }
    }
}

/// State handler function pointer type
pub type StateHandler<M> = fn(&mut M, &Event) -> HandlerResult;

/// Trait implemented by every state machine instance
///
/// An instance holds the currently active handler and owns a bounded
/// event queue. Queue operations take `&self` so that producers in
/// interrupt context can post through a shared reference; the queue
/// implementation is responsible for its own interrupt discipline.
pub trait StateMachine: Sized {
    /// Get the currently active state handler
    fn handler(&self) -> StateHandler<Self>;

    /// Set the active state handler
    ///
    /// Called by the engine during transitions and by application
    /// handlers to record a transition target or superstate.
    fn set_handler(&mut self, handler: StateHandler<Self>);

    /// Post an event with the given signal to this instance's queue
    fn post(&self, signal: Signal) -> HsmResult<()>;

    /// Post a complete event to this instance's queue
    fn post_event(&self, event: Event) -> HsmResult<()>;

    /// Take the next queued event, if any
    fn pop_event(&self) -> Option<Event>;

    /// Number of events waiting in the queue
    fn pending(&self) -> usize;
}

/// Predefined root state: ignores every event
///
/// The top of all hierarchies. Non-root handlers delegate here (via
/// their parent chain) with [`HandlerResult::Super`]; the root never
/// does.
pub fn root<M: StateMachine>(_machine: &mut M, _event: &Event) -> HandlerResult {
    HandlerResult::Ignored
}
