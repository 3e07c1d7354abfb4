//! Raw, unvalidated automaton definitions.

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Transition table as written by hand or read from a definition file:
/// source state to (symbol to target state).
pub type TransitionTable = BTreeMap<StateId, BTreeMap<String, StateId>>;

/// The six-tuple a DFA is built from, before any validation.
///
/// Symbols are kept as strings here so that definitions read from JSON can
/// be checked for the single-character rule instead of failing to parse.
/// Nothing about a definition is trusted until
/// [`Automaton::build`](crate::core::Automaton::build) accepts it.
///
/// # Example
///
/// ```rust
/// use dfa_trace::builder::{alphabet_of, state_set, AutomatonDefinition};
/// use dfa_trace::core::{Automaton, StateId};
/// use dfa_trace::transitions;
///
/// let definition = AutomatonDefinition {
///     states: state_set(0..=1),
///     alphabet: alphabet_of(['x']),
///     transitions: transitions! {
///         0 => { 'x' => 1 },
///         1 => { 'x' => 0 },
///     },
///     start_state: StateId::new(0),
///     final_states: state_set([1]),
///     trap_states: state_set([]),
/// };
///
/// let automaton = Automaton::build(definition).unwrap();
/// assert!(automaton.simulate("xxx").accepted);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    /// Every state of the automaton
    pub states: BTreeSet<StateId>,
    /// Input symbols, each expected to be a single character
    pub alphabet: BTreeSet<String>,
    /// Transition function
    pub transitions: TransitionTable,
    /// Where every simulation begins
    pub start_state: StateId,
    /// Accepting states
    #[serde(default)]
    pub final_states: BTreeSet<StateId>,
    /// States that reject as soon as they are entered
    #[serde(default)]
    pub trap_states: BTreeSet<StateId>,
}

/// Collect raw identifiers into a state set.
pub fn state_set<I>(ids: I) -> BTreeSet<StateId>
where
    I: IntoIterator<Item = u32>,
{
    ids.into_iter().map(StateId::new).collect()
}

/// Collect characters into an alphabet of one-character symbols.
pub fn alphabet_of<I>(symbols: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = char>,
{
    symbols.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transitions;

    fn toggle() -> AutomatonDefinition {
        AutomatonDefinition {
            states: state_set(0..=1),
            alphabet: alphabet_of(['0', '1']),
            transitions: transitions! {
                0 => { '0' => 0, '1' => 1 },
                1 => { '0' => 1, '1' => 0 },
            },
            start_state: StateId::new(0),
            final_states: state_set([1]),
            trap_states: state_set([]),
        }
    }

    #[test]
    fn definition_reads_from_json() {
        let json = r#"{
            "states": [0, 1],
            "alphabet": ["0", "1"],
            "transitions": {
                "0": {"0": 0, "1": 1},
                "1": {"0": 1, "1": 0}
            },
            "start_state": 0,
            "final_states": [1]
        }"#;

        let parsed: AutomatonDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, toggle());
    }

    #[test]
    fn definition_survives_json_roundtrip() {
        let definition = toggle();
        let json = serde_json::to_string(&definition).unwrap();
        let parsed: AutomatonDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(definition, parsed);
    }

    #[test]
    fn trap_and_final_states_default_to_empty() {
        let json = r#"{
            "states": [0],
            "alphabet": ["a"],
            "transitions": {"0": {"a": 0}},
            "start_state": 0
        }"#;

        let parsed: AutomatonDefinition = serde_json::from_str(json).unwrap();
        assert!(parsed.final_states.is_empty());
        assert!(parsed.trap_states.is_empty());
    }

    #[test]
    fn malformed_symbols_still_parse() {
        let json = r#"{
            "states": [0],
            "alphabet": ["ab"],
            "transitions": {},
            "start_state": 0
        }"#;

        let parsed: AutomatonDefinition = serde_json::from_str(json).unwrap();
        assert!(parsed.alphabet.contains("ab"));
    }
}
