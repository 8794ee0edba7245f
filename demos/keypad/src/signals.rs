//! Application signals for the keypad

use hsm_core::Signal;

/// System clock tick
pub const SIG_TICK: Signal = Signal::new(5);
/// Macro key pressed; payload carries the key index
pub const SIG_KEY_DOWN: Signal = Signal::new(6);
/// Macro key released; payload carries the key index
pub const SIG_KEY_UP: Signal = Signal::new(7);
/// Mode key pressed
pub const SIG_MODE_DOWN: Signal = Signal::new(8);
/// Mode key released
pub const SIG_MODE_UP: Signal = Signal::new(9);
/// Volume knob turned up
pub const SIG_VOL_UP: Signal = Signal::new(10);
/// Volume knob turned down
pub const SIG_VOL_DOWN: Signal = Signal::new(11);
/// Secret press pattern recognized
pub const SIG_PATTERN_PRESS: Signal = Signal::new(12);

/// Human-readable signal names for the trace output
pub fn signal_name(signal: Signal) -> &'static str {
    match signal {
        Signal::NONE => "SIG_NONE",
        Signal::SILENT => "SIG_SILENT",
        Signal::ENTRY => "SIG_ENTRY",
        Signal::EXIT => "SIG_EXIT",
        Signal::INITIAL => "SIG_INITIAL",
        SIG_TICK => "SIG_TICK",
        SIG_KEY_DOWN => "SIG_KEY_DOWN",
        SIG_KEY_UP => "SIG_KEY_UP",
        SIG_MODE_DOWN => "SIG_MODE_DOWN",
        SIG_MODE_UP => "SIG_MODE_UP",
        SIG_VOL_UP => "SIG_VOL_UP",
        SIG_VOL_DOWN => "SIG_VOL_DOWN",
        SIG_PATTERN_PRESS => "SIG_PATTERN_PRESS",
        _ => "SIG_UNKNOWN",
    }
}
