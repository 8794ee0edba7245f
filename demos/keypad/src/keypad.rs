//! Keypad state machine
//!
//! Hierarchy: `root -> operational -> {macro_bank, media, config}`.
//! `operational` is composite: its initial transition drills into the
//! macro bank. The secret press pattern opens the config state from
//! anywhere below `operational`.

use hsm_core::{root, Event, HandlerResult, Signal, StateMachine};
use hsm_instance::{impl_state_machine, StateCell};

use crate::signals::*;

pub struct Keypad {
    cell: StateCell<Keypad>,
    /// Active macro bank selected in config
    pub bank: u8,
    /// Media volume, saturating
    pub volume: i8,
    /// Macros fired since boot
    pub macros_fired: u32,
}

impl_state_machine!(Keypad, cell);

impl Keypad {
    pub fn new() -> Self {
        Self {
            cell: StateCell::new(),
            bank: 0,
            volume: 0,
            macros_fired: 0,
        }
    }

    /// Current state name for logging
    pub fn state_name(&self) -> &'static str {
        let state = self.handler() as usize;
        if state == operational as usize {
            "OPERATIONAL"
        } else if state == macro_bank as usize {
            "MACRO_BANK"
        } else if state == media as usize {
            "MEDIA"
        } else if state == config as usize {
            "CONFIG"
        } else {
            "ROOT"
        }
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

/// Superstate of everything the keypad does after boot
pub fn operational(m: &mut Keypad, e: &Event) -> HandlerResult {
    match e.signal {
        Signal::ENTRY | Signal::EXIT => HandlerResult::Handled,
        Signal::INITIAL => {
            m.set_handler(macro_bank);
            HandlerResult::Changed
        }
        sig if sig == SIG_TICK => HandlerResult::Handled,
        sig if sig == SIG_PATTERN_PRESS => {
            m.set_handler(config);
            HandlerResult::Changed
        }
        _ => {
            m.set_handler(root);
            HandlerResult::Super
        }
    }
}

/// Default mode: keys fire macros from the active bank
pub fn macro_bank(m: &mut Keypad, e: &Event) -> HandlerResult {
    match e.signal {
        Signal::ENTRY | Signal::EXIT => HandlerResult::Handled,
        Signal::INITIAL => HandlerResult::Ignored,
        sig if sig == SIG_KEY_DOWN => {
            m.macros_fired += 1;
            HandlerResult::Handled
        }
        sig if sig == SIG_MODE_UP => {
            m.set_handler(media);
            HandlerResult::Changed
        }
        _ => {
            m.set_handler(operational);
            HandlerResult::Super
        }
    }
}

/// Media mode: the knob drives the host volume
pub fn media(m: &mut Keypad, e: &Event) -> HandlerResult {
    match e.signal {
        Signal::ENTRY | Signal::EXIT => HandlerResult::Handled,
        Signal::INITIAL => HandlerResult::Ignored,
        sig if sig == SIG_VOL_UP => {
            m.volume = m.volume.saturating_add(1);
            HandlerResult::Handled
        }
        sig if sig == SIG_VOL_DOWN => {
            m.volume = m.volume.saturating_sub(1);
            HandlerResult::Handled
        }
        sig if sig == SIG_MODE_UP => {
            m.set_handler(macro_bank);
            HandlerResult::Changed
        }
        _ => {
            m.set_handler(operational);
            HandlerResult::Super
        }
    }
}

/// Config mode, opened by the secret pattern: keys select the bank
pub fn config(m: &mut Keypad, e: &Event) -> HandlerResult {
    match e.signal {
        Signal::ENTRY | Signal::EXIT => HandlerResult::Handled,
        Signal::INITIAL => HandlerResult::Ignored,
        sig if sig == SIG_KEY_DOWN => {
            if let Some(key) = e.payload {
                m.bank = key as u8;
            }
            HandlerResult::Handled
        }
        sig if sig == SIG_MODE_UP => {
            m.set_handler(macro_bank);
            HandlerResult::Changed
        }
        _ => {
            m.set_handler(operational);
            HandlerResult::Super
        }
    }
}
