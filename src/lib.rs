//! rematch: restricted regular-expression matching via finite automata.
//!
//! The pattern language is byte-oriented: any literal byte matches itself,
//! `.` matches any single byte, and the modifiers `?` (zero-or-one), `*`
//! (zero-or-more), `+` (one-or-more) apply to the literal that follows
//! them. No grouping, alternation, classes, or escapes.
//!
//! Compilation builds a nondeterministic automaton directly from the
//! pattern, then converts it to a complete deterministic automaton via
//! epsilon-closure and subset construction. Matching executes the DFA.
//!
//! ```
//! let re = rematch::compile("?a*b+c").unwrap();
//! assert!(re.is_match("abc"));
//! assert!(!re.is_match(""));
//! ```
//!
//! The underlying automata stay available for callers that want them:
//!
//! ```
//! use rematch::{Dfa, Nfa};
//! let nfa = Nfa::compile("a.c").unwrap();
//! let dfa = Dfa::from_nfa(&nfa);
//! assert_eq!(nfa.is_match("abc"), dfa.is_match("abc"));
//! ```

pub mod automaton;
pub mod pattern;

pub use automaton::{Dfa, Nfa};
pub use pattern::PatternError;

/// A compiled pattern, matched via its deterministic automaton.
///
/// Immutable and reusable across any number of sequential match calls.
pub struct Regex {
    pattern: String,
    dfa: Dfa,
}

impl Regex {
    /// Test whether `input` matches the whole pattern.
    ///
    /// Never errors; an input with no viable transition simply does not
    /// match.
    pub fn is_match(&self, input: &str) -> bool {
        self.dfa.is_match(input)
    }

    /// The source pattern this regex was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The deterministic automaton backing this regex.
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }
}

impl std::fmt::Debug for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &self.pattern)
            .field("dfa_states", &self.dfa.state_count())
            .finish()
    }
}

/// Compile a pattern into a [`Regex`].
///
/// Validation errors abort compilation; no partial automaton is exposed.
pub fn compile(pattern: &str) -> Result<Regex, PatternError> {
    let nfa = Nfa::compile(pattern)?;
    let dfa = Dfa::from_nfa(&nfa);
    Ok(Regex {
        pattern: pattern.to_string(),
        dfa,
    })
}
