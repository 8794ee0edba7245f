//! State cell: the handler/queue pair backing one machine instance

use hsm_core::{root, Event, HsmResult, Signal, StateHandler, StateMachine};

use crate::queue::EventQueue;
use crate::DEFAULT_EVENT_QUEUE_CAPACITY;

/// Storage for one state machine instance
///
/// Couples the currently active handler with the instance's event
/// queue. Application machines embed a `StateCell<Self>` and delegate
/// their [`StateMachine`] impl to it (see [`impl_state_machine!`]).
///
/// The handler starts at the predefined [`root`] state; it points at a
/// concrete application state once the engine has run the initial
/// transition.
pub struct StateCell<M: StateMachine, const N: usize = DEFAULT_EVENT_QUEUE_CAPACITY> {
    handler: StateHandler<M>,
    queue: EventQueue<N>,
}

impl<M: StateMachine, const N: usize> StateCell<M, N> {
    /// Create a new cell with the root handler installed
    pub const fn new() -> Self {
        Self {
            handler: root::<M>,
            queue: EventQueue::new(),
        }
    }

    /// Get the active state handler
    pub fn handler(&self) -> StateHandler<M> {
        self.handler
    }

    /// Install a new active state handler
    pub fn set_handler(&mut self, handler: StateHandler<M>) {
        self.handler = handler;
    }

    /// Post an event with the given signal to this instance's queue
    pub fn post(&self, signal: Signal) -> HsmResult<()> {
        self.queue.push(Event::new(signal))
    }

    /// Post a complete event to this instance's queue
    pub fn post_event(&self, event: Event) -> HsmResult<()> {
        self.queue.push(event)
    }

    /// Take the next queued event, if any
    pub fn pop_event(&self) -> Option<Event> {
        self.queue.pop()
    }

    /// Number of events waiting in the queue
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Access the underlying queue (e.g. to hand to a producer)
    pub fn queue(&self) -> &EventQueue<N> {
        &self.queue
    }
}

impl<M: StateMachine, const N: usize> Default for StateCell<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Implement [`StateMachine`] for a type embedding a [`StateCell`]
///
/// ```ignore
/// struct Keypad {
///     cell: StateCell<Keypad>,
///     leds: u8,
/// }
///
/// impl_state_machine!(Keypad, cell);
/// ```
#[macro_export]
macro_rules! impl_state_machine {
    ($name:ty, $cell:ident) => {
        impl $crate::StateMachine for $name {
            fn handler(&self) -> $crate::StateHandler<Self> {
                self.$cell.handler()
            }

            fn set_handler(&mut self, handler: $crate::StateHandler<Self>) {
                self.$cell.set_handler(handler)
            }

            fn post(&self, signal: $crate::Signal) -> $crate::HsmResult<()> {
                self.$cell.post(signal)
            }

            fn post_event(&self, event: $crate::Event) -> $crate::HsmResult<()> {
                self.$cell.post_event(event)
            }

            fn pop_event(&self) -> Option<$crate::Event> {
                self.$cell.pop_event()
            }

            fn pending(&self) -> usize {
                self.$cell.pending()
            }
        }
    };
}
