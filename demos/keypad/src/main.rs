//! Macro keypad firmware simulation
//!
//! Drives the HSM engine with a scripted stream of key events the way
//! the firmware's scan loop would: producers post, the main loop calls
//! `process()`. A trace hook prints every dispatch except the tick.

mod keypad;
mod signals;

use hsm_core::{Event, StateMachine};
use hsm_engine::{trace, Hsm, TracePoint};
use hsm_input::{PatternPressDetector, PressKind};

use keypad::{operational, Keypad};
use signals::*;

/// Secret knock on key 0: short, short, long
const UNLOCK_PATTERN: [PressKind; 3] = [PressKind::Short, PressKind::Short, PressKind::Long];

fn print_dispatch(point: &TracePoint) {
    let TracePoint::Dispatch { signal, result, .. } = *point;
    println!("    {} -> {:?}", signal_name(signal), result);
}

/// One scripted key press: posts the edge events and feeds the
/// pattern detector, advancing the simulated clock.
fn press_key(
    m: &Keypad,
    detector: &mut PatternPressDetector,
    now_ms: &mut u32,
    key: u16,
    hold_ms: u32,
) {
    detector.on_button_down(key as usize, *now_ms);
    m.post_event(Event::with_payload(SIG_KEY_DOWN, key)).unwrap();
    *now_ms += hold_ms;
    m.post_event(Event::with_payload(SIG_KEY_UP, key)).unwrap();
    if detector.on_button_up(key as usize, *now_ms, m).is_err() {
        eprintln!("pattern event dropped: queue full");
    }
    *now_ms += 100;
}

fn main() {
    println!("keypad-demo: hierarchical state machine simulation");
    println!("==================================================");

    trace::set_hook(print_dispatch);
    trace::filter_signal(SIG_TICK);

    let mut m = Keypad::new();
    let mut detector = PatternPressDetector::new(SIG_PATTERN_PRESS, &UNLOCK_PATTERN);
    let mut now_ms: u32 = 0;

    println!("\n[boot]");
    m.set_initial_state(operational);
    println!("  state: {}", m.state_name());

    println!("\n[firing two macros]");
    press_key(&m, &mut detector, &mut now_ms, 3, 80);
    press_key(&m, &mut detector, &mut now_ms, 7, 80);
    m.post(SIG_TICK).unwrap();
    m.process();
    println!("  state: {}, macros fired: {}", m.state_name(), m.macros_fired);

    println!("\n[mode key: media]");
    m.post(SIG_MODE_UP).unwrap();
    m.post(SIG_VOL_UP).unwrap();
    m.post(SIG_VOL_UP).unwrap();
    m.process();
    println!("  state: {}, volume: {}", m.state_name(), m.volume);

    println!("\n[secret knock on key 0: short short long]");
    // The gap expires the sequence window left by the macro presses,
    // so the knock starts a fresh sequence.
    now_ms += 3000;
    press_key(&m, &mut detector, &mut now_ms, 0, 80);
    press_key(&m, &mut detector, &mut now_ms, 0, 80);
    press_key(&m, &mut detector, &mut now_ms, 0, 600);
    m.process();
    println!("  state: {}", m.state_name());

    println!("\n[selecting bank 2, back to macros]");
    press_key(&m, &mut detector, &mut now_ms, 2, 80);
    m.post(SIG_MODE_UP).unwrap();
    m.process();
    println!(
        "  state: {}, bank: {}, volume: {}, macros fired: {}",
        m.state_name(),
        m.bank,
        m.volume,
        m.macros_fired
    );

    trace::clear_hook();
}
