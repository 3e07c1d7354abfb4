//! State identifiers for automata.
//!
//! States are opaque, ordered identifiers. They carry no behaviour of their
//! own: whether a state is final or a trap is a property of the automaton
//! that owns it, not of the identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a DFA state.
///
/// Identifiers are small integers in practice, but callers should treat
/// them as opaque and only compare or order them.
///
/// # Example
///
/// ```rust
/// use dfa_trace::core::StateId;
///
/// let q0 = StateId::new(0);
/// let q1 = StateId::from(1);
///
/// assert!(q0 < q1);
/// assert_eq!(q1.to_string(), "1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
    /// Create a state identifier from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw numeric value of this identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for StateId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interpret a raw alphabet entry as a single input symbol.
///
/// Returns `None` unless the string holds exactly one character.
pub(crate) fn single_symbol(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Some(symbol),
        _ => None,
    }
}
