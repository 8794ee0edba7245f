#![no_std]
#![forbid(unsafe_code)]

//! # HSM Input
//!
//! Input edge detectors that turn raw button edges into application
//! events. Detectors are pure event producers: they never touch the
//! state hierarchy, they only [`post`](hsm_core::StateMachine::post)
//! into an instance's queue. Time enters exclusively through the
//! `now_ms` arguments; the engine itself never reads a clock.

pub mod pattern;

pub use pattern::*;
