//! Individual DFA invariants, in the order they are checked.

use crate::builder::{AutomatonDefinition, ConstructionError};
use crate::core::state::single_symbol;

/// A single invariant check. Returns every violation it finds, in
/// ascending order of the offending state or symbol.
pub(crate) type Rule = fn(&AutomatonDefinition) -> Vec<ConstructionError>;

/// All invariants, in reporting order.
pub(crate) const RULES: [Rule; 8] = [
    states_are_non_empty,
    start_is_known,
    finals_are_known,
    traps_are_known,
    alphabet_is_well_formed,
    table_is_well_formed,
    table_is_total,
    traps_are_closed,
];

fn states_are_non_empty(definition: &AutomatonDefinition) -> Vec<ConstructionError> {
    if definition.states.is_empty() {
        vec![ConstructionError::EmptyStates]
    } else {
        Vec::new()
    }
}

fn start_is_known(definition: &AutomatonDefinition) -> Vec<ConstructionError> {
    if definition.states.contains(&definition.start_state) {
        Vec::new()
    } else {
        vec![ConstructionError::UnknownStartState {
            state: definition.start_state,
        }]
    }
}

fn finals_are_known(definition: &AutomatonDefinition) -> Vec<ConstructionError> {
    definition
        .final_states
        .difference(&definition.states)
        .map(|&state| ConstructionError::UnknownFinalState { state })
        .collect()
}

fn traps_are_known(definition: &AutomatonDefinition) -> Vec<ConstructionError> {
    definition
        .trap_states
        .difference(&definition.states)
        .map(|&state| ConstructionError::UnknownTrapState { state })
        .collect()
}

fn alphabet_is_well_formed(definition: &AutomatonDefinition) -> Vec<ConstructionError> {
    if definition.alphabet.is_empty() {
        return vec![ConstructionError::EmptyAlphabet];
    }

    definition
        .alphabet
        .iter()
        .filter(|raw| single_symbol(raw).is_none())
        .map(|raw| ConstructionError::MalformedSymbol {
            symbol: raw.clone(),
        })
        .collect()
}

fn table_is_well_formed(definition: &AutomatonDefinition) -> Vec<ConstructionError> {
    let mut violations = Vec::new();

    for (&state, row) in &definition.transitions {
        if !definition.states.contains(&state) {
            violations.push(ConstructionError::UnknownSourceState { state });
        }

        for (raw, &target) in row {
            let Some(symbol) = single_symbol(raw) else {
                violations.push(ConstructionError::MalformedSymbol {
                    symbol: raw.clone(),
                });
                continue;
            };

            if !definition.alphabet.contains(raw) {
                violations.push(ConstructionError::UnknownSymbol { state, symbol });
            }

            if !definition.states.contains(&target) {
                violations.push(ConstructionError::UnknownTargetState {
                    state,
                    symbol,
                    target,
                });
            }
        }
    }

    violations
}

fn table_is_total(definition: &AutomatonDefinition) -> Vec<ConstructionError> {
    let mut violations = Vec::new();

    for &state in definition.states.difference(&definition.final_states) {
        let row = definition.transitions.get(&state);

        for raw in &definition.alphabet {
            let Some(symbol) = single_symbol(raw) else {
                continue;
            };

            if row.and_then(|row| row.get(raw)).is_none() {
                violations.push(ConstructionError::MissingTransition { state, symbol });
            }
        }
    }

    violations
}

fn traps_are_closed(definition: &AutomatonDefinition) -> Vec<ConstructionError> {
    let mut violations = Vec::new();

    for &trap in &definition.trap_states {
        // Only a final trap can get here without a row; totality covers the rest.
        let Some(row) = definition.transitions.get(&trap) else {
            continue;
        };

        for (raw, &target) in row {
            if target == trap {
                continue;
            }
            if let Some(symbol) = single_symbol(raw) {
                violations.push(ConstructionError::TrapEscape {
                    trap,
                    symbol,
                    target,
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{alphabet_of, state_set};
    use crate::core::StateId;
    use crate::transitions;

    fn two_state() -> AutomatonDefinition {
        AutomatonDefinition {
            states: state_set(0..=1),
            alphabet: alphabet_of(['a', 'b']),
            transitions: transitions! {
                0 => { 'a' => 1, 'b' => 0 },
                1 => { 'a' => 1, 'b' => 1 },
            },
            start_state: StateId::new(0),
            final_states: state_set([]),
            trap_states: state_set([1]),
        }
    }

    #[test]
    fn valid_definition_passes_every_rule() {
        let definition = two_state();
        for rule in RULES {
            assert!(rule(&definition).is_empty());
        }
    }

    #[test]
    fn unknown_finals_are_listed_in_order() {
        let mut definition = two_state();
        definition.final_states = state_set([9, 1, 4]);

        assert_eq!(
            finals_are_known(&definition),
            vec![
                ConstructionError::UnknownFinalState {
                    state: StateId::new(4)
                },
                ConstructionError::UnknownFinalState {
                    state: StateId::new(9)
                },
            ]
        );
    }

    #[test]
    fn malformed_alphabet_entries_are_reported() {
        let mut definition = two_state();
        definition.alphabet.insert("ab".to_string());
        definition.alphabet.insert(String::new());

        assert_eq!(alphabet_is_well_formed(&definition).len(), 2);
    }

    #[test]
    fn empty_alphabet_short_circuits_symbol_checks() {
        let mut definition = two_state();
        definition.alphabet.clear();

        assert_eq!(
            alphabet_is_well_formed(&definition),
            vec![ConstructionError::EmptyAlphabet]
        );
    }

    #[test]
    fn table_structure_reports_every_bad_entry() {
        let mut definition = two_state();
        definition.transitions = transitions! {
            0 => { 'a' => 1, 'c' => 0, "zz" => 0 },
            1 => { 'a' => 7, 'b' => 1 },
            5 => { 'a' => 0 },
        };

        let violations = table_is_well_formed(&definition);
        assert_eq!(
            violations,
            vec![
                ConstructionError::UnknownSymbol {
                    state: StateId::new(0),
                    symbol: 'c'
                },
                ConstructionError::MalformedSymbol {
                    symbol: "zz".to_string()
                },
                ConstructionError::UnknownTargetState {
                    state: StateId::new(1),
                    symbol: 'a',
                    target: StateId::new(7)
                },
                ConstructionError::UnknownSourceState {
                    state: StateId::new(5)
                },
            ]
        );
    }

    #[test]
    fn totality_ignores_final_states() {
        let mut definition = two_state();
        definition.trap_states.clear();
        definition.final_states = state_set([1]);
        definition.transitions.remove(&StateId::new(1));

        assert!(table_is_total(&definition).is_empty());
    }

    #[test]
    fn totality_requires_rows_for_non_final_states() {
        let mut definition = two_state();
        definition.transitions.remove(&StateId::new(1));

        assert_eq!(
            table_is_total(&definition),
            vec![
                ConstructionError::MissingTransition {
                    state: StateId::new(1),
                    symbol: 'a'
                },
                ConstructionError::MissingTransition {
                    state: StateId::new(1),
                    symbol: 'b'
                },
            ]
        );
    }

    #[test]
    fn rowless_trap_must_be_final() {
        let mut definition = two_state();
        definition.transitions.remove(&StateId::new(1));

        assert_eq!(
            table_is_total(&definition).first(),
            Some(&ConstructionError::MissingTransition {
                state: StateId::new(1),
                symbol: 'a'
            })
        );
        assert!(traps_are_closed(&definition).is_empty());

        definition.final_states = state_set([1]);
        for rule in RULES {
            assert!(rule(&definition).is_empty());
        }
    }

    #[test]
    fn trap_states_may_not_escape() {
        let mut definition = two_state();
        definition
            .transitions
            .get_mut(&StateId::new(1))
            .unwrap()
            .insert("b".to_string(), StateId::new(0));

        assert_eq!(
            traps_are_closed(&definition),
            vec![ConstructionError::TrapEscape {
                trap: StateId::new(1),
                symbol: 'b',
                target: StateId::new(0)
            }]
        );
    }
}
