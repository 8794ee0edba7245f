//! Event dispatch and the transition algorithm

use hsm_core::{root, Event, HandlerResult, StateHandler, StateMachine};

use crate::hierarchy::{discover_between, discover_to_root, find_in_path, same_state};
use crate::trace::{self, TracePoint};
use crate::{ENTRY_EVENT, EXIT_EVENT, INITIAL_EVENT, MAX_STATE_DEPTH, SILENT_EVENT};

/// Invoke the machine's current handler with `event`
///
/// Silent hierarchy probes pass `log = false` so discovery walks stay
/// out of the trace stream.
pub(crate) fn call<M: StateMachine>(machine: &mut M, event: &Event, log: bool) -> HandlerResult {
    let handler = machine.handler();
    let result = handler(machine, event);
    if log {
        trace::emit(&TracePoint::Dispatch {
            signal: event.signal,
            state: handler as usize,
            result,
        });
    }
    result
}

/// Hierarchical state machine operations
///
/// Blanket-implemented for every [`StateMachine`]; an application type
/// embedding a state cell gets the whole engine for free.
pub trait Hsm: StateMachine {
    /// Install the initial state and run its entry/initial cascade
    ///
    /// Walks from the root down to `target` delivering `ENTRY` at each
    /// level, then follows `INITIAL` transitions of composite states
    /// until a leaf accepts. Afterwards the active handler is that
    /// leaf.
    fn set_initial_state(&mut self, target: StateHandler<Self>);

    /// Drain the event queue, dispatching each event in FIFO order
    ///
    /// Runs to completion: events posted by handlers during the drain
    /// are appended and processed before returning, never preempting
    /// the transition in progress.
    fn process(&mut self);
}

impl<M: StateMachine> Hsm for M {
    fn set_initial_state(&mut self, target: StateHandler<Self>) {
        // Extensibility hook: the root sees INITIAL exactly once.
        let mut top: StateHandler<Self> = root::<Self>;
        self.set_handler(top);
        call(self, &INITIAL_EVENT, true);

        let mut destination = target;
        self.set_handler(target);

        loop {
            let mut path = [destination; MAX_STATE_DEPTH];
            let depth = discover_between(self, top, destination, &mut path);

            // Enter top-down, from just below `top` to the destination.
            for index in (0..depth).rev() {
                self.set_handler(path[index]);
                let result = call(self, &ENTRY_EVENT, true);
                debug_assert!(
                    result != HandlerResult::Super,
                    "ENTRY must not delegate to the superstate"
                );
            }

            self.set_handler(destination);
            if call(self, &INITIAL_EVENT, true) == HandlerResult::Changed {
                // Composite: drill into the default child.
                top = destination;
                destination = self.handler();
            } else {
                self.set_handler(destination);
                break;
            }
        }
    }

    fn process(&mut self) {
        while let Some(event) = self.pop_event() {
            dispatch_event(self, &event);
        }
    }
}

/// Dispatch one event through the active handler chain and execute any
/// requested transition
fn dispatch_event<M: StateMachine>(machine: &mut M, event: &Event) {
    let initial = machine.handler();

    // Bubble the event up the hierarchy until some handler consumes it.
    let mut last = initial;
    let mut state_that_handled;
    let mut self_transition;
    let mut result;
    loop {
        state_that_handled = machine.handler();
        result = call(machine, event, true);
        self_transition = same_state(machine.handler(), last);
        last = machine.handler();
        if !result.is_super() {
            break;
        }
    }

    // A superstate handled the event by transitioning back to the
    // originally active child.
    let back_to_self_top = same_state(machine.handler(), initial)
        && !same_state(machine.handler(), state_that_handled);

    match result {
        HandlerResult::Handled | HandlerResult::Ignored => {
            machine.set_handler(initial);
        }
        HandlerResult::Changed => {
            let destination = machine.handler();
            machine.set_handler(initial);
            execute_transition(
                machine,
                destination,
                self_transition,
                back_to_self_top,
                state_that_handled,
                last,
            );
        }
        HandlerResult::Super => unreachable!("bubble loop exits only on terminal results"),
    }
}

/// Execute a transition from the active state to `destination`
///
/// Exits from the active leaf up to (but excluding) the least common
/// ancestor of source and destination, enters from below the LCA down
/// to the destination, then cascades `INITIAL` until a leaf accepts.
fn execute_transition<M: StateMachine>(
    machine: &mut M,
    mut destination: StateHandler<M>,
    self_transition: bool,
    mut back_to_self_top: bool,
    mut state_that_handled: StateHandler<M>,
    last: StateHandler<M>,
) {
    let mut back_to_self_bottom = false;
    let mut processing = true;

    while processing {
        let mut path = [destination; MAX_STATE_DEPTH];
        let depth = discover_to_root(machine, destination, &mut path);

        'probe: loop {
            match find_in_path(machine.handler(), &path[..depth]) {
                Some(0) => {
                    if self_transition {
                        // Self-transition: exit, then fall through to
                        // the silent probe so the state is re-entered.
                        let result = call(machine, &EXIT_EVENT, true);
                        debug_assert!(
                            result != HandlerResult::Super,
                            "EXIT must not delegate to the superstate"
                        );
                    } else if back_to_self_top {
                        // Re-aim at the ancestor that handled the event
                        // so the subtree below it is exited first.
                        destination = state_that_handled;
                        back_to_self_top = false;
                        back_to_self_bottom = true;
                        break 'probe;
                    } else if back_to_self_bottom {
                        // Subtree exited; aim back at the original child.
                        destination = last;
                        back_to_self_bottom = false;
                        break 'probe;
                    } else {
                        // Active and destination coincide: run the
                        // destination's initial transition.
                        if call(machine, &INITIAL_EVENT, true) == HandlerResult::Changed {
                            // Drilled into a child: re-discover from it.
                            destination = machine.handler();
                            machine.set_handler(path[0]);
                        } else {
                            machine.set_handler(path[0]);
                            processing = false;
                        }
                        break 'probe;
                    }
                }
                Some(index) => {
                    // Active is the LCA at path[index]: enter top-down
                    // from just below it to the destination.
                    for entry_index in (0..index).rev() {
                        machine.set_handler(path[entry_index]);
                        let result = call(machine, &ENTRY_EVENT, true);
                        debug_assert!(
                            result != HandlerResult::Super,
                            "ENTRY must not delegate to the superstate"
                        );
                    }
                    machine.set_handler(path[0]);
                    if call(machine, &INITIAL_EVENT, true) == HandlerResult::Changed {
                        destination = machine.handler();
                        state_that_handled = path[0];
                    } else {
                        processing = false;
                    }
                    machine.set_handler(path[0]);
                    break 'probe;
                }
                None => {
                    // Active not on the destination's path: exit it and
                    // move to its parent via the silent probe below.
                    let result = call(machine, &EXIT_EVENT, true);
                    debug_assert!(
                        result != HandlerResult::Super,
                        "EXIT must not delegate to the superstate"
                    );
                }
            }

            if !call(machine, &SILENT_EVENT, false).is_super() {
                break 'probe;
            }
        }
    }
}
