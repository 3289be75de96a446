//! Subset construction: NFA to DFA conversion.
//!
//! Classic worklist algorithm. Each DFA state represents an epsilon-closed
//! set of NFA states; its canonical label is derived from that set, and a
//! completed-state table keyed by label guarantees that re-deriving a
//! previously seen set reuses the existing state rather than allocating a
//! duplicate. Dedup is what bounds the worklist: without it, cyclic NFAs
//! would regenerate the same subsets forever.
//!
//! The worklist is drained strictly FIFO. Correctness does not depend on
//! the order, but it keeps construction reproducible, which matters for
//! debugging and for tests that inspect the state table.

use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashMap;

use super::arena::{StateArena, StateId, Symbol};
use super::closure::{epsilon_closure, transition_set, StateSet};
use super::matcher;
use super::nfa::Nfa;

/// A deterministic finite automaton produced by subset construction.
///
/// Every state has exactly one edge per alphabet byte plus one wildcard
/// edge, and no epsilon edges. Immutable once built; reusable across any
/// number of match calls.
pub struct Dfa {
    arena: StateArena,
    start: StateId,
}

/// Construction state threaded through the algorithm explicitly, so the
/// conversion is reentrant and testable in isolation.
struct BuildContext<'a> {
    nfa: &'a Nfa,
    arena: StateArena,
    /// Completed-state table: canonical label to DFA state id.
    completed: FxHashMap<String, StateId>,
    /// DFA states awaiting transition completion, drained FIFO.
    worklist: VecDeque<StateId>,
}

impl<'a> BuildContext<'a> {
    fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            arena: StateArena::new(),
            completed: FxHashMap::default(),
            worklist: VecDeque::new(),
        }
    }

    /// Canonicalize an epsilon-closed NFA state set into a DFA state.
    ///
    /// If a state with the same label already exists, that exact state is
    /// returned; otherwise a new state is registered and queued for
    /// transition completion. The empty set canonicalizes to the dead state
    /// with label `""`.
    fn intern(&mut self, closure: &StateSet) -> StateId {
        let mut composition: Vec<StateId> = closure.iter().copied().collect();
        composition.sort_unstable();

        let nfa_arena = self.nfa.arena();
        let label = composition
            .iter()
            .map(|&id| nfa_arena[id].label.as_str())
            .collect::<Vec<_>>()
            .join(".");

        if let Some(&existing) = self.completed.get(&label) {
            return existing;
        }

        let accept = composition.iter().any(|&id| nfa_arena[id].accept);
        let id = self.arena.alloc(label.clone());
        self.arena[id].accept = accept;
        self.arena[id].composition = composition;
        self.completed.insert(label, id);
        self.worklist.push_back(id);
        trace!(
            "dfa: new state {:?} accept={} ({} nfa states)",
            self.arena[id].label,
            accept,
            self.arena[id].composition.len()
        );
        id
    }
}

impl Dfa {
    /// Convert an NFA into an equivalent complete DFA.
    pub fn from_nfa(nfa: &Nfa) -> Self {
        // The wildcard is always part of the transition alphabet, even when
        // the pattern never uses it: it is the catch-all for input bytes
        // outside the literal alphabet.
        let symbols: Vec<Symbol> = nfa
            .alphabet()
            .map(Symbol::Byte)
            .chain(std::iter::once(Symbol::Wildcard))
            .collect();

        let mut cx = BuildContext::new(nfa);

        let start_set: StateSet = std::iter::once(nfa.start()).collect();
        let start = cx.intern(&epsilon_closure(nfa.arena(), &start_set));

        while let Some(id) = cx.worklist.pop_front() {
            let composition: StateSet = cx.arena[id].composition.iter().copied().collect();
            for &symbol in &symbols {
                let moved = transition_set(nfa.arena(), &composition, symbol);
                let reached = epsilon_closure(nfa.arena(), &moved);
                let dest = cx.intern(&reached);
                cx.arena.add_edge(id, symbol, dest);
            }
        }

        trace!("dfa: construction complete, {} states", cx.arena.len());
        Dfa {
            arena: cx.arena,
            start,
        }
    }

    /// Execute this DFA against `input`.
    pub fn is_match(&self, input: &str) -> bool {
        matcher::traverse(&self.arena, self.start, input.as_bytes())
    }

    pub fn arena(&self) -> &StateArena {
        &self.arena
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.arena.len()
    }
}
