//! Automaton execution.
//!
//! A single traversal works for both automata, since NFA and DFA are both
//! an arena plus a start id. The walk is greedy and single-path: at each
//! step the exact-byte edge wins over the wildcard edge, which wins over an
//! epsilon edge, and there is no backtracking. On a complete DFA the first
//! two cases are exhaustive; the epsilon branches are reachable only when
//! executing an NFA directly.
//!
//! Epsilon steps never loop forever: every epsilon walk between two
//! input-consuming steps carries a visited set and gives up when a state
//! repeats without progress.

use rustc_hash::FxHashSet;

use super::arena::{StateArena, StateId, Symbol};

/// Execute the automaton rooted at `start` against `input`.
///
/// Read-only over the automaton; never errors, a failed transition is a
/// reject.
pub fn traverse(arena: &StateArena, start: StateId, input: &[u8]) -> bool {
    let mut current = start;
    let mut epsilon_seen = FxHashSet::default();

    let mut i = 0;
    while i < input.len() {
        let byte = input[i];
        if let Some(next) = arena[current].first_out(Symbol::Byte(byte)) {
            current = next;
            i += 1;
            epsilon_seen.clear();
        } else if let Some(next) = arena[current].first_out(Symbol::Wildcard) {
            current = next;
            i += 1;
            epsilon_seen.clear();
        } else if let Some(next) = arena[current].first_out(Symbol::Epsilon) {
            // No input consumed; a revisited state means the walk is stuck.
            if !epsilon_seen.insert(current) {
                return false;
            }
            current = next;
        } else {
            return false;
        }
    }

    // Input exhausted: chase epsilon edges looking for an accept state.
    epsilon_seen.clear();
    loop {
        if arena[current].accept {
            return true;
        }
        match arena[current].first_out(Symbol::Epsilon) {
            Some(next) => {
                if !epsilon_seen.insert(current) {
                    return false;
                }
                current = next;
            }
            None => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_edge_wins_over_wildcard() {
        let mut arena = StateArena::new();
        let start = arena.alloc("0".to_string());
        let exact = arena.alloc("1".to_string());
        let fallback = arena.alloc("2".to_string());
        arena.add_edge(start, Symbol::Byte(b'a'), exact);
        arena.add_edge(start, Symbol::Wildcard, fallback);
        arena[exact].accept = true;
        assert!(traverse(&arena, start, b"a"));
        // Any other byte takes the wildcard edge, which does not accept.
        assert!(!traverse(&arena, start, b"b"));
    }

    #[test]
    fn test_epsilon_does_not_consume_input() {
        let mut arena = StateArena::new();
        let start = arena.alloc("0".to_string());
        let mid = arena.alloc("1".to_string());
        let end = arena.alloc("2".to_string());
        arena.add_edge(start, Symbol::Epsilon, mid);
        arena.add_edge(mid, Symbol::Byte(b'x'), end);
        arena[end].accept = true;
        assert!(traverse(&arena, start, b"x"));
    }

    #[test]
    fn test_epsilon_cycle_rejects_instead_of_looping() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        let b = arena.alloc("1".to_string());
        arena.add_edge(a, Symbol::Epsilon, b);
        arena.add_edge(b, Symbol::Epsilon, a);
        // Neither state accepts and neither consumes input.
        assert!(!traverse(&arena, a, b"x"));
        assert!(!traverse(&arena, a, b""));
    }

    #[test]
    fn test_trailing_epsilon_walk_finds_accept() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        let b = arena.alloc("1".to_string());
        let c = arena.alloc("2".to_string());
        arena.add_edge(a, Symbol::Epsilon, b);
        arena.add_edge(b, Symbol::Epsilon, c);
        arena[c].accept = true;
        assert!(traverse(&arena, a, b""));
    }

    #[test]
    fn test_no_edge_rejects() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        arena[a].accept = true;
        assert!(traverse(&arena, a, b""));
        assert!(!traverse(&arena, a, b"x"));
    }
}
