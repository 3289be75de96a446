//! NFA construction.
//!
//! The builder walks the pattern left to right and grows a chain of states,
//! one fresh state per literal, decorated with epsilon edges and self-loops
//! for the repetition modifiers. A modifier character does not build
//! anything itself; it selects the operation applied to the next literal.
//!
//! The resulting graph is a chain: every operation adds exactly one fresh
//! state, wires it to the current cursor state, and advances the cursor.
//! After the last character the cursor state is marked accepting.

use std::collections::BTreeSet;

use crate::pattern::{self, PatternError};

use super::arena::{StateArena, StateId, Symbol};
use super::matcher;

/// The operation a pattern character selects for the next literal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Op {
    /// Exactly one occurrence.
    Concat,
    /// Zero or one occurrence (`?`).
    Optional,
    /// Zero or more occurrences (`*`).
    Star,
    /// One or more occurrences (`+`).
    Plus,
}

/// A nondeterministic finite automaton compiled from a pattern.
///
/// Immutable once constructed; reusable across any number of match calls.
pub struct Nfa {
    arena: StateArena,
    start: StateId,
    /// Construction cursor: the chain tail the next operation extends.
    current: StateId,
    /// Monotonic counter used to generate fresh state labels.
    size: usize,
    /// Literal bytes seen in the pattern. The wildcard is implicitly part of
    /// the alphabet and never recorded here; neither is epsilon. Sorted so
    /// subset construction visits symbols in a deterministic order.
    alphabet: BTreeSet<u8>,
}

impl Nfa {
    /// Validate `pattern` and construct its NFA.
    ///
    /// Construction cannot fail once validation has passed.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        pattern::validate(pattern)?;
        let mut nfa = Self::blank();
        nfa.construct(pattern.as_bytes());
        Ok(nfa)
    }

    /// An NFA holding only its start state. Matches nothing until
    /// constructed, since the start state is not accepting.
    fn blank() -> Self {
        let mut arena = StateArena::new();
        let start = arena.alloc("0".to_string());
        Self {
            arena,
            start,
            current: start,
            size: 1,
            alphabet: BTreeSet::new(),
        }
    }

    /// Syntax-driven construction: modifier characters set the pending
    /// operation, every other character applies it.
    fn construct(&mut self, pattern: &[u8]) {
        let mut pending: Option<Op> = None;
        for &byte in pattern {
            match byte {
                b'?' => pending = Some(Op::Optional),
                b'*' => pending = Some(Op::Star),
                b'+' => pending = Some(Op::Plus),
                _ => {
                    let symbol = if byte == b'.' {
                        Symbol::Wildcard
                    } else {
                        self.alphabet.insert(byte);
                        Symbol::Byte(byte)
                    };
                    match pending.take().unwrap_or(Op::Concat) {
                        Op::Concat => self.concat(symbol),
                        Op::Optional => self.optional(symbol),
                        Op::Star => self.star(symbol),
                        Op::Plus => self.plus(symbol),
                    }
                }
            }
        }
        let tail = self.current;
        self.arena[tail].accept = true;
    }

    /// Allocate the next chain state.
    fn fresh(&mut self) -> StateId {
        let id = self.arena.alloc(self.size.to_string());
        self.size += 1;
        id
    }

    /// One mandatory occurrence: `current --symbol--> fresh`.
    fn concat(&mut self, symbol: Symbol) {
        let state = self.fresh();
        self.arena.add_edge(self.current, symbol, state);
        self.current = state;
    }

    /// Zero or one occurrence: the fresh state is also reachable by epsilon.
    fn optional(&mut self, symbol: Symbol) {
        let state = self.fresh();
        self.arena.add_edge(self.current, symbol, state);
        self.arena.add_edge(self.current, Symbol::Epsilon, state);
        self.current = state;
    }

    /// Zero or more occurrences: optional, plus a self-loop on the fresh
    /// state for the repeats.
    fn star(&mut self, symbol: Symbol) {
        let state = self.fresh();
        self.arena.add_edge(self.current, symbol, state);
        self.arena.add_edge(self.current, Symbol::Epsilon, state);
        self.arena.add_edge(state, symbol, state);
        self.current = state;
    }

    /// One or more occurrences: one mandatory occurrence followed by zero or
    /// more.
    fn plus(&mut self, symbol: Symbol) {
        self.concat(symbol);
        self.star(symbol);
    }

    /// Execute this NFA against `input`.
    pub fn is_match(&self, input: &str) -> bool {
        matcher::traverse(&self.arena, self.start, input.as_bytes())
    }

    pub fn arena(&self) -> &StateArena {
        &self.arena
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    /// The literal-byte alphabet observed in the pattern, sorted.
    pub fn alphabet(&self) -> impl Iterator<Item = u8> + '_ {
        self.alphabet.iter().copied()
    }

    /// Number of states, including the start state.
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }
}
