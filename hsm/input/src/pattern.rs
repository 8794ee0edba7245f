//! Long/short press pattern recognition

use hsm_core::{HsmResult, Signal, StateMachine};

/// Number of keys the detector tracks press durations for
pub const MAX_KEYS: usize = 10;

/// A press longer than this many milliseconds counts as long
pub const DEFAULT_SHORT_PRESS_MAX_MS: u32 = 400;

/// Releases further apart than this abandon the sequence
pub const DEFAULT_PATTERN_TIMEOUT_MS: u32 = 2000;

/// Classification of one completed press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressKind {
    /// Held at most the short-press threshold
    Short,
    /// Held longer than the short-press threshold
    Long,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PressKind {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PressKind::Short => defmt::write!(fmt, "Short"),
            PressKind::Long => defmt::write!(fmt, "Long"),
        }
    }
}

/// Recognizes a fixed sequence of short/long presses
///
/// Feed it raw button edges from the key scanner; when the sequence of
/// releases matches the configured pattern, it posts the target signal
/// to the machine's queue and starts over. A press of the wrong kind,
/// or a release arriving after the inter-release timeout, resets the
/// sequence (the late release is then counted as a fresh first press).
pub struct PatternPressDetector {
    signal: Signal,
    pattern: &'static [PressKind],
    count: usize,
    sequence_start: u32,
    short_press_max_ms: u32,
    pattern_timeout_ms: u32,
    last_down_ms: [u32; MAX_KEYS],
}

impl PatternPressDetector {
    /// Create a detector posting `signal` when `pattern` is matched
    pub const fn new(signal: Signal, pattern: &'static [PressKind]) -> Self {
        Self {
            signal,
            pattern,
            count: 0,
            sequence_start: 0,
            short_press_max_ms: DEFAULT_SHORT_PRESS_MAX_MS,
            pattern_timeout_ms: DEFAULT_PATTERN_TIMEOUT_MS,
            last_down_ms: [0; MAX_KEYS],
        }
    }

    /// Override the press-duration threshold and inter-release timeout
    pub const fn with_timings(mut self, short_press_max_ms: u32, pattern_timeout_ms: u32) -> Self {
        self.short_press_max_ms = short_press_max_ms;
        self.pattern_timeout_ms = pattern_timeout_ms;
        self
    }

    /// Record a button press edge
    pub fn on_button_down(&mut self, key: usize, now_ms: u32) {
        if key < MAX_KEYS {
            self.last_down_ms[key] = now_ms;
        }
    }

    /// Record a button release edge
    ///
    /// Returns [`hsm_core::HsmError::QueueFull`] if the pattern
    /// completed but the machine's queue rejected the event; the
    /// sequence is reset either way.
    pub fn on_button_up<M: StateMachine>(
        &mut self,
        key: usize,
        now_ms: u32,
        machine: &M,
    ) -> HsmResult<()> {
        if key >= MAX_KEYS || self.pattern.is_empty() {
            return Ok(());
        }

        let duration = now_ms.wrapping_sub(self.last_down_ms[key]);
        self.last_down_ms[key] = 0;

        if self.count == 0 {
            self.sequence_start = now_ms;
        } else if now_ms.wrapping_sub(self.sequence_start) > self.pattern_timeout_ms {
            self.reset();
            self.sequence_start = now_ms;
        }

        let kind = if duration > self.short_press_max_ms {
            PressKind::Long
        } else {
            PressKind::Short
        };

        if self.pattern[self.count] == kind {
            self.count += 1;
            if self.count == self.pattern.len() {
                self.reset();
                return machine.post(self.signal);
            }
        } else {
            self.reset();
        }
        Ok(())
    }

    /// Abandon the sequence in progress
    pub fn reset(&mut self) {
        self.count = 0;
        self.sequence_start = 0;
    }
}
