#![no_std]
#![forbid(unsafe_code)]

//! # HSM Instance
//!
//! Per-instance runtime plumbing for the hierarchical state machine
//! engine: the bounded event queue that feeds a machine and the state
//! cell that couples a queue with the active handler.
//!
//! Producers (ISRs, timer callbacks, input scanners) post into the
//! queue from interrupt context; the run-to-completion loop drains it.
//! Each queue operation runs in one brief critical section.

pub mod cell;
pub mod queue;

pub use hsm_core::*;

pub use cell::*;
pub use queue::*;

/// Default event queue capacity for state machine instances
pub const DEFAULT_EVENT_QUEUE_CAPACITY: usize = 16;
