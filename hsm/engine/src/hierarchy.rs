//! Hierarchy discovery by silent probing
//!
//! The engine learns the superstate chain by dispatching the reserved
//! `SILENT` event: every non-root handler responds by installing its
//! parent and returning [`hsm_core::HandlerResult::Super`]; the root
//! ignores it. Each walk restores the machine's handler before
//! returning.

use hsm_core::{StateHandler, StateMachine};

use crate::engine::call;
use crate::{MAX_STATE_DEPTH, SILENT_EVENT};

/// Compare two states by handler identity
pub(crate) fn same_state<M: StateMachine>(a: StateHandler<M>, b: StateHandler<M>) -> bool {
    // Function pointer comparison - handler identity is state identity
    a as usize == b as usize
}

/// Record the path from `start` up to the root
///
/// On return `path[0] == start` and `path[depth - 1]` is the root (or
/// the deepest ancestor reachable within [`MAX_STATE_DEPTH`]).
pub(crate) fn discover_to_root<M: StateMachine>(
    machine: &mut M,
    start: StateHandler<M>,
    path: &mut [StateHandler<M>; MAX_STATE_DEPTH],
) -> usize {
    let original = machine.handler();
    machine.set_handler(start);

    let mut depth = 0;
    loop {
        path[depth] = machine.handler();
        depth += 1;
        if depth >= MAX_STATE_DEPTH {
            break;
        }
        if !call(machine, &SILENT_EVENT, false).is_super() {
            break;
        }
    }

    machine.set_handler(original);
    depth
}

/// Record the path from `bottom` up to, but excluding, `top`
///
/// The path is produced bottom-up (`path[0] == bottom`); callers walk
/// it in reverse to enter top-down.
pub(crate) fn discover_between<M: StateMachine>(
    machine: &mut M,
    top: StateHandler<M>,
    bottom: StateHandler<M>,
    path: &mut [StateHandler<M>; MAX_STATE_DEPTH],
) -> usize {
    let original = machine.handler();
    machine.set_handler(bottom);

    let mut depth = 0;
    while !same_state(machine.handler(), top) && depth < MAX_STATE_DEPTH {
        path[depth] = machine.handler();
        depth += 1;
        if !call(machine, &SILENT_EVENT, false).is_super() {
            // Root reached without meeting `top`
            break;
        }
    }

    machine.set_handler(original);
    depth
}

/// Index of `handler` within the discovered prefix of `path`
pub(crate) fn find_in_path<M: StateMachine>(
    handler: StateHandler<M>,
    path: &[StateHandler<M>],
) -> Option<usize> {
    path.iter()
        .position(|candidate| same_state(*candidate, handler))
}
