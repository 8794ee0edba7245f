#![no_std]
#![forbid(unsafe_code)]

//! # HSM Core
//!
//! Core types and abstractions for the hierarchical state machine engine.
//! This crate defines the signal and event primitives plus the handler
//! contract that application state functions must follow.

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

pub mod event;
pub mod signal;
pub mod state;

pub use event::*;
pub use signal::*;
pub use state::*;

/// HSM framework version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout the HSM framework
pub type HsmResult<T> = Result<T, HsmError>;

/// Error types for HSM framework operations
///
/// Hierarchy depth overflow is deliberately absent: discovery truncates
/// silently and the bound is a programmer error to catch in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HsmError {
    /// Event queue is full
    QueueFull,
}

impl fmt::Display for HsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HsmError::QueueFull => write!(f, "Event queue is full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HsmError {}

#[cfg(feature = "defmt")]
impl defmt::Format for HsmError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            HsmError::QueueFull => defmt::write!(fmt, "QueueFull"),
        }
    }
}
