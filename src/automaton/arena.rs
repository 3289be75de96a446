//! Arena-based state allocation for automaton graphs.
//!
//! Automaton graphs are cyclic: `*` and `+` add self-loop edges, and DFA
//! states reference arbitrary sets of NFA states. Owning every state in a
//! single arena and referencing it by index keeps ownership centralized and
//! makes cycles trivially representable, with no lifetime hazards.
//!
//! `StateId` is just a `u32` index, so ids can be freely copied, hashed, and
//! stored in transition tables.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A state identifier - an index into a [`StateArena`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A transition symbol.
///
/// `Byte` is a literal input byte; `Wildcard` matches any single input byte
/// during matching; `Epsilon` consumes no input. `Epsilon` is never part of
/// an automaton's alphabet, and `Wildcard` is implicitly always part of it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Symbol {
    Byte(u8),
    Wildcard,
    Epsilon,
}

/// Destination list for one symbol. Almost always one entry; two when a
/// repetition self-loop and a chain edge share a symbol.
pub type EdgeList = SmallVec<[StateId; 2]>;

/// A state in the automaton.
///
/// NFA states carry a numeric label and an empty composition set. DFA states
/// built by subset construction carry the sorted NFA ids they represent in
/// `composition`, and a label derived from it.
#[derive(Clone, Default)]
pub struct State {
    /// Canonical label, used as the dedup key during subset construction.
    pub label: String,
    /// Whether reaching this state with the input exhausted is a match.
    pub accept: bool,
    /// Outgoing edges, per symbol, in insertion order.
    out: FxHashMap<Symbol, EdgeList>,
    /// For DFA states only: the sorted NFA state ids this state represents.
    pub composition: Vec<StateId>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("label", &self.label)
            .field("accept", &self.accept)
            .field("out_symbols", &self.out.len())
            .field("composition", &self.composition)
            .finish()
    }
}

impl State {
    pub fn new(label: String) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    /// Append an edge for `symbol`, preserving insertion order.
    pub fn add_edge(&mut self, symbol: Symbol, to: StateId) {
        self.out.entry(symbol).or_default().push(to);
    }

    /// All destinations reachable by a single edge labeled `symbol`.
    #[inline]
    pub fn out_states(&self, symbol: Symbol) -> &[StateId] {
        self.out.get(&symbol).map_or(&[], |edges| edges.as_slice())
    }

    /// The first edge for `symbol` in insertion order, if any.
    #[inline]
    pub fn first_out(&self, symbol: Symbol) -> Option<StateId> {
        self.out.get(&symbol).and_then(|edges| edges.first().copied())
    }

    /// Number of symbols with at least one outgoing edge.
    pub fn out_degree(&self) -> usize {
        self.out.len()
    }

    /// Iterate over (symbol, destinations) pairs. Order is unspecified.
    pub fn edges(&self) -> impl Iterator<Item = (Symbol, &[StateId])> {
        self.out.iter().map(|(sym, edges)| (*sym, edges.as_slice()))
    }
}

/// Arena owning every state of one automaton.
///
/// States are allocated contiguously and referenced by [`StateId`]; the
/// arena frees all state memory when dropped.
#[derive(Clone, Default)]
pub struct StateArena {
    states: Vec<State>,
}

impl std::fmt::Debug for StateArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateArena")
            .field("states_count", &self.states.len())
            .finish()
    }
}

impl StateArena {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Allocate a new state with the given label, returning its id.
    pub fn alloc(&mut self, label: String) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(State::new(label));
        id
    }

    /// Add an edge from `from` to `to` labeled `symbol`.
    pub fn add_edge(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        self.states[from.index()].add_edge(symbol, to);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all states with their ids, in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, state)| (StateId(i as u32), state))
    }
}

impl std::ops::Index<StateId> for StateArena {
    type Output = State;

    #[inline]
    fn index(&self, id: StateId) -> &Self::Output {
        &self.states[id.index()]
    }
}

impl std::ops::IndexMut<StateId> for StateArena {
    #[inline]
    fn index_mut(&mut self, id: StateId) -> &mut Self::Output {
        &mut self.states[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_index() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        let b = arena.alloc("1".to_string());
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[a].label, "0");
        assert_eq!(arena[b].label, "1");
    }

    #[test]
    fn test_edges_preserve_insertion_order() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        let b = arena.alloc("1".to_string());
        // Self-loop first, chain edge second, as the star builder does.
        arena.add_edge(a, Symbol::Byte(b'x'), a);
        arena.add_edge(a, Symbol::Byte(b'x'), b);
        assert_eq!(arena[a].out_states(Symbol::Byte(b'x')), &[a, b]);
        assert_eq!(arena[a].first_out(Symbol::Byte(b'x')), Some(a));
        assert_eq!(arena[a].first_out(Symbol::Epsilon), None);
    }

    #[test]
    fn test_self_loop_is_representable() {
        let mut arena = StateArena::new();
        let a = arena.alloc("0".to_string());
        arena.add_edge(a, Symbol::Wildcard, a);
        assert_eq!(arena[a].out_states(Symbol::Wildcard), &[a]);
    }
}
