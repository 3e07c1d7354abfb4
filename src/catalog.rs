//! Built-in automata and the definition file format.
//!
//! Two reference automata ship with the crate:
//!
//! - **bets**, over `{a, b}`:
//!   `(aa + bb + aba + ba)(aba + bab + bbb)(a + b)*(a + b + aa + abab)(aa + bb)*`
//! - **stars**, over `{0, 1}`:
//!   `(111 + 101 + 001 + 010)(1 + 0 + 11)(1 + 0 + 11)*(111 + 000)(111 + 000)*(01 + 10 + 00)`
//!
//! Further automata can be supplied as a JSON [`CatalogFile`].

use crate::builder::{alphabet_of, state_set, AutomatonDefinition};
use crate::core::StateId;
use crate::transitions;
use serde::{Deserialize, Serialize};

/// An automaton definition together with the name it is registered under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedDefinition {
    pub name: String,
    /// Human-readable description, usually the language it recognises
    #[serde(default)]
    pub description: Option<String>,
    pub definition: AutomatonDefinition,
}

/// On-disk list of automaton definitions.
///
/// ```json
/// {
///   "automata": [
///     {
///       "name": "toggle",
///       "description": "odd number of 1s",
///       "definition": {
///         "states": [0, 1],
///         "alphabet": ["0", "1"],
///         "transitions": {"0": {"0": 0, "1": 1}, "1": {"0": 1, "1": 0}},
///         "start_state": 0,
///         "final_states": [1]
///       }
///     }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub automata: Vec<NamedDefinition>,
}

/// Every built-in automaton.
pub fn builtin() -> Vec<NamedDefinition> {
    vec![bets(), stars()]
}

/// The "bets" automaton. States 7 and 8 are traps.
pub fn bets() -> NamedDefinition {
    NamedDefinition {
        name: "bets".to_string(),
        description: Some(
            "(aa + bb + aba + ba) (aba + bab + bbb) (a + b)* (a + b + aa + abab) (aa + bb)*"
                .to_string(),
        ),
        definition: AutomatonDefinition {
            states: state_set(0..=12),
            alphabet: alphabet_of(['a', 'b']),
            transitions: transitions! {
                0 => { 'a' => 2, 'b' => 1 },
                1 => { 'a' => 3, 'b' => 3 },
                2 => { 'a' => 3, 'b' => 4 },
                3 => { 'a' => 5, 'b' => 6 },
                4 => { 'a' => 3, 'b' => 7 },
                5 => { 'a' => 8, 'b' => 9 },
                6 => { 'a' => 10, 'b' => 10 },
                7 => { 'a' => 7, 'b' => 7 },
                8 => { 'a' => 8, 'b' => 8 },
                9 => { 'a' => 11, 'b' => 8 },
                10 => { 'a' => 7, 'b' => 11 },
                11 => { 'a' => 12, 'b' => 12 },
                12 => { 'a' => 12, 'b' => 12 },
            },
            start_state: StateId::new(0),
            final_states: state_set([12]),
            trap_states: state_set([7, 8]),
        },
    }
}

/// The "stars" automaton. State 4 is the trap.
pub fn stars() -> NamedDefinition {
    NamedDefinition {
        name: "stars".to_string(),
        description: Some(
            "(111 + 101 + 001 + 010) (1 + 0 + 11) (1 + 0 + 11)* (111 + 000) (111 + 000)* (01 + 10 + 00)"
                .to_string(),
        ),
        definition: AutomatonDefinition {
            states: state_set(0..=23),
            alphabet: alphabet_of(['0', '1']),
            transitions: transitions! {
                0 => { '0' => 1, '1' => 2 },
                1 => { '0' => 5, '1' => 3 },
                2 => { '0' => 5, '1' => 5 },
                3 => { '0' => 6, '1' => 4 },
                4 => { '0' => 4, '1' => 4 },
                5 => { '0' => 4, '1' => 6 },
                6 => { '0' => 7, '1' => 7 },
                7 => { '0' => 9, '1' => 8 },
                8 => { '0' => 9, '1' => 12 },
                9 => { '0' => 12, '1' => 8 },
                10 => { '0' => 10, '1' => 11 },
                11 => { '0' => 22, '1' => 12 },
                12 => { '0' => 9, '1' => 17 },
                13 => { '0' => 15, '1' => 8 },
                14 => { '0' => 10, '1' => 11 },
                15 => { '0' => 14, '1' => 16 },
                16 => { '0' => 22, '1' => 12 },
                17 => { '0' => 20, '1' => 19 },
                18 => { '0' => 15, '1' => 8 },
                19 => { '0' => 23, '1' => 19 },
                20 => { '0' => 18, '1' => 21 },
                21 => { '0' => 9, '1' => 12 },
                22 => { '0' => 13, '1' => 8 },
                23 => { '0' => 18, '1' => 21 },
            },
            start_state: StateId::new(0),
            final_states: state_set([10, 11, 18, 21, 22, 23]),
            trap_states: state_set([4]),
        },
    }
}
