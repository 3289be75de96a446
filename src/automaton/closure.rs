//! Set operations over automaton states.
//!
//! Both primitives operate on sets of state ids and are shared by the
//! NFA-side consumers and the subset constructor. Epsilon closure is an
//! iterative fixed point with an explicit visited set, so epsilon cycles
//! (which self-loops make easy to form) terminate without recursion.

use rustc_hash::FxHashSet;

use super::arena::{StateArena, StateId, Symbol};

/// A set of states, deduplicated by id.
pub type StateSet = FxHashSet<StateId>;

/// Union, over all states in `states`, of destinations reachable by a
/// single edge labeled `symbol`.
pub fn transition_set(arena: &StateArena, states: &StateSet, symbol: Symbol) -> StateSet {
    let mut reached = StateSet::default();
    for &id in states {
        reached.extend(arena[id].out_states(symbol).iter().copied());
    }
    reached
}

/// The smallest set containing `states` and everything reachable from it by
/// zero or more epsilon edges.
///
/// Worklist formulation: a state is expanded at most once, so the loop
/// terminates even when epsilon edges form cycles.
pub fn epsilon_closure(arena: &StateArena, states: &StateSet) -> StateSet {
    let mut closed = states.clone();
    let mut worklist: Vec<StateId> = states.iter().copied().collect();
    while let Some(id) = worklist.pop() {
        for &next in arena[id].out_states(Symbol::Epsilon) {
            if closed.insert(next) {
                worklist.push(next);
            }
        }
    }
    closed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[StateId]) -> StateSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_transition_set_unions_destinations() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        let b = arena.alloc("1".to_string());
        let c = arena.alloc("2".to_string());
        arena.add_edge(a, Symbol::Byte(b'x'), b);
        arena.add_edge(b, Symbol::Byte(b'x'), c);
        let reached = transition_set(&arena, &set(&[a, b]), Symbol::Byte(b'x'));
        assert_eq!(reached, set(&[b, c]));
        // No edges for an unseen symbol.
        let reached = transition_set(&arena, &set(&[a, b]), Symbol::Byte(b'y'));
        assert!(reached.is_empty());
    }

    #[test]
    fn test_epsilon_closure_includes_input_states() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        let closed = epsilon_closure(&arena, &set(&[a]));
        assert_eq!(closed, set(&[a]));
    }

    #[test]
    fn test_epsilon_closure_is_transitive() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        let b = arena.alloc("1".to_string());
        let c = arena.alloc("2".to_string());
        arena.add_edge(a, Symbol::Epsilon, b);
        arena.add_edge(b, Symbol::Epsilon, c);
        let closed = epsilon_closure(&arena, &set(&[a]));
        assert_eq!(closed, set(&[a, b, c]));
    }

    #[test]
    fn test_epsilon_closure_terminates_on_cycles() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        let b = arena.alloc("1".to_string());
        arena.add_edge(a, Symbol::Epsilon, b);
        arena.add_edge(b, Symbol::Epsilon, a);
        arena.add_edge(a, Symbol::Epsilon, a);
        let closed = epsilon_closure(&arena, &set(&[a]));
        assert_eq!(closed, set(&[a, b]));
    }

    #[test]
    fn test_epsilon_closure_is_idempotent() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        let b = arena.alloc("1".to_string());
        let c = arena.alloc("2".to_string());
        arena.add_edge(a, Symbol::Epsilon, b);
        arena.add_edge(b, Symbol::Epsilon, c);
        let once = epsilon_closure(&arena, &set(&[a]));
        let twice = epsilon_closure(&arena, &once);
        assert_eq!(once, twice);
    }
}
