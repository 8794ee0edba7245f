//! Bounded event queue for state machine instances

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;
use hsm_core::{Event, HsmError, HsmResult};

use crate::DEFAULT_EVENT_QUEUE_CAPACITY;

/// Event queue for a state machine instance
///
/// A bounded FIFO that stores events by value. Backpressure is
/// drop-on-full: a push against a full queue fails and the newest
/// arrival is discarded, never the queued ones.
///
/// Operations take `&self` and run inside a critical section, so a
/// producer may push from interrupt context while the consumer pops
/// from thread context. Under single-producer single-consumer use no
/// event is lost or duplicated.
pub struct EventQueue<const N: usize = DEFAULT_EVENT_QUEUE_CAPACITY> {
    events: Mutex<RefCell<Deque<Event, N>>>,
}

impl<const N: usize> EventQueue<N> {
    /// Create a new empty event queue
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Append an event at the tail (FIFO)
    ///
    /// Returns [`HsmError::QueueFull`] and leaves the queue untouched
    /// if the queue is at capacity.
    pub fn push(&self, event: Event) -> HsmResult<()> {
        critical_section::with(|cs| {
            self.events
                .borrow_ref_mut(cs)
                .push_back(event)
                .map_err(|_| HsmError::QueueFull)
        })
    }

    /// Remove and return the event at the head
    pub fn pop(&self) -> Option<Event> {
        critical_section::with(|cs| self.events.borrow_ref_mut(cs).pop_front())
    }

    /// Number of events in the queue
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.events.borrow_ref(cs).len())
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.events.borrow_ref(cs).is_empty())
    }

    /// Check if the queue is full
    pub fn is_full(&self) -> bool {
        critical_section::with(|cs| self.events.borrow_ref(cs).is_full())
    }

    /// Maximum capacity of the queue
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard all queued events
    pub fn clear(&self) {
        critical_section::with(|cs| self.events.borrow_ref_mut(cs).clear());
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
