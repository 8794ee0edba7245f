//! Hierarchy discovery tests
//!
//! Uses a linear chain `root -> l1 -> l2 -> ... -> l10` deep enough to
//! exercise the depth bound: from `l9` the path (including root) fills
//! the scratch array exactly; from `l10` discovery truncates before
//! reaching root.

use hsm_core::{root, Event, HandlerResult, StateMachine};
use hsm_instance::{impl_state_machine, StateCell};

use crate::hierarchy::{discover_between, discover_to_root, find_in_path, same_state};
use crate::MAX_STATE_DEPTH;

struct Probe {
    cell: StateCell<Probe>,
}

impl_state_machine!(Probe, cell);

impl Probe {
    fn new() -> Self {
        Self {
            cell: StateCell::new(),
        }
    }
}

macro_rules! chain_state {
    ($name:ident, $parent:path) => {
        fn $name(m: &mut Probe, _e: &Event) -> HandlerResult {
            m.set_handler($parent);
            HandlerResult::Super
        }
    };
}

chain_state!(l1, root);
chain_state!(l2, l1);
chain_state!(l3, l2);
chain_state!(l4, l3);
chain_state!(l5, l4);
chain_state!(l6, l5);
chain_state!(l7, l6);
chain_state!(l8, l7);
chain_state!(l9, l8);
chain_state!(l10, l9);

#[test]
fn path_to_root_is_deepest_first_and_restores_handler() {
    let mut m = Probe::new();
    m.set_handler(l1);

    let mut path = [l3 as fn(&mut Probe, &Event) -> HandlerResult; MAX_STATE_DEPTH];
    let depth = discover_to_root(&mut m, l3, &mut path);

    assert_eq!(depth, 4);
    assert!(same_state(path[0], l3));
    assert!(same_state(path[1], l2));
    assert!(same_state(path[2], l1));
    assert!(same_state(path[3], root));

    // The probe walk must leave the active handler untouched.
    assert!(same_state(m.handler(), l1));
}

#[test]
fn discover_between_is_bottom_up_and_excludes_top() {
    let mut m = Probe::new();

    let mut path = [l3 as fn(&mut Probe, &Event) -> HandlerResult; MAX_STATE_DEPTH];
    let depth = discover_between(&mut m, l1, l3, &mut path);

    assert_eq!(depth, 2);
    assert!(same_state(path[0], l3));
    assert!(same_state(path[1], l2));
}

#[test]
fn find_in_path_locates_by_handler_identity() {
    let mut m = Probe::new();

    let mut path = [l3 as fn(&mut Probe, &Event) -> HandlerResult; MAX_STATE_DEPTH];
    let depth = discover_to_root(&mut m, l3, &mut path);

    assert_eq!(find_in_path(l3, &path[..depth]), Some(0));
    assert_eq!(find_in_path(l1, &path[..depth]), Some(2));
    assert_eq!(find_in_path(l5, &path[..depth]), None);
}

#[test]
fn full_depth_hierarchy_is_walkable() {
    let mut m = Probe::new();

    let mut path = [l9 as fn(&mut Probe, &Event) -> HandlerResult; MAX_STATE_DEPTH];
    let depth = discover_to_root(&mut m, l9, &mut path);

    assert_eq!(depth, MAX_STATE_DEPTH);
    assert!(same_state(path[0], l9));
    assert!(same_state(path[MAX_STATE_DEPTH - 1], root));
}

#[test]
fn one_past_full_depth_truncates_silently() {
    let mut m = Probe::new();

    let mut path = [l10 as fn(&mut Probe, &Event) -> HandlerResult; MAX_STATE_DEPTH];
    let depth = discover_to_root(&mut m, l10, &mut path);

    assert_eq!(depth, MAX_STATE_DEPTH);
    assert!(same_state(path[0], l10));
    // Root falls off the truncated path.
    assert!(!same_state(path[MAX_STATE_DEPTH - 1], root));
    assert!(same_state(path[MAX_STATE_DEPTH - 1], l1));
}
