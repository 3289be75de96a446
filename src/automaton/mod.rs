//! Finite-automaton engine.
//!
//! The pipeline is validator -> builder -> (optionally) subset constructor
//! -> matcher:
//!
//! - `arena`: shared data types (`StateId`, `Symbol`, `State`, `StateArena`)
//! - `nfa`: syntax-driven NFA construction from a validated pattern
//! - `closure`: transition-set and epsilon-closure over state sets
//! - `dfa`: subset construction producing a complete DFA
//! - `matcher`: greedy traversal shared by both automata

pub mod arena;
pub mod closure;
pub mod dfa;
pub mod matcher;
pub mod nfa;

pub use arena::{State, StateArena, StateId, Symbol};
pub use closure::{epsilon_closure, transition_set, StateSet};
pub use dfa::Dfa;
pub use matcher::traverse;
pub use nfa::Nfa;
