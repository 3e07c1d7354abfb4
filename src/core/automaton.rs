//! The immutable, validated DFA.

use super::state::{single_symbol, StateId};
use crate::builder::{AutomatonDefinition, ConstructionError};
use crate::simulation::{self, Trace};
use crate::validation;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A deterministic finite automaton that has passed validation.
///
/// An `Automaton` can only be obtained through [`Automaton::build`] (or the
/// [`AutomatonBuilder`](crate::builder::AutomatonBuilder)), so every value of
/// this type satisfies the DFA invariants:
///
/// - states and alphabet are non-empty
/// - start, final and trap states are all known states
/// - every transition uses a known source, a one-character alphabet symbol
///   and a known target
/// - every non-final state has a transition for every symbol
/// - trap states never transition anywhere but themselves
///
/// All fields are read-only, so one automaton can back any number of
/// concurrent simulations without locking.
///
/// # Example
///
/// ```rust
/// use dfa_trace::builder::AutomatonBuilder;
///
/// // Words over {a, b} that end in 'a'
/// let automaton = AutomatonBuilder::new()
///     .states(0..=1)
///     .alphabet(['a', 'b'])
///     .transition(0, 'a', 1)
///     .transition(0, 'b', 0)
///     .transition(1, 'a', 1)
///     .transition(1, 'b', 0)
///     .start(0)
///     .final_state(1)
///     .build()
///     .unwrap();
///
/// assert!(automaton.accepts("abba"));
/// assert!(!automaton.accepts("ab"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<char>,
    transitions: BTreeMap<StateId, BTreeMap<char, StateId>>,
    start_state: StateId,
    final_states: BTreeSet<StateId>,
    trap_states: BTreeSet<StateId>,
}

/// Serializable description of a compiled automaton, with every set sorted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AutomatonProperties {
    pub states: Vec<StateId>,
    pub alphabet: Vec<char>,
    pub transitions: BTreeMap<StateId, BTreeMap<char, StateId>>,
    pub start_state: StateId,
    pub final_states: Vec<StateId>,
    pub trap_states: Vec<StateId>,
}

impl Automaton {
    /// Validate a definition and build the automaton from it.
    ///
    /// Invariants are checked in a fixed order and the first violation is
    /// returned. Use [`Automaton::audit`] to see all of them at once.
    pub fn build(definition: AutomatonDefinition) -> Result<Self, ConstructionError> {
        if let Some(violation) = validation::first_violation(&definition) {
            return Err(violation);
        }

        Ok(Self::compile(definition))
    }

    /// Check a definition against every invariant without building it.
    pub fn audit(definition: &AutomatonDefinition) -> Validation<(), NonEmptyVec<ConstructionError>> {
        validation::audit(definition)
    }

    // Only called on definitions that passed validation, so every symbol is
    // a single character.
    fn compile(definition: AutomatonDefinition) -> Self {
        let alphabet = definition
            .alphabet
            .iter()
            .filter_map(|raw| single_symbol(raw))
            .collect();

        let transitions = definition
            .transitions
            .into_iter()
            .map(|(state, row)| {
                let row = row
                    .into_iter()
                    .filter_map(|(raw, target)| single_symbol(&raw).map(|symbol| (symbol, target)))
                    .collect();
                (state, row)
            })
            .collect();

        Self {
            states: definition.states,
            alphabet,
            transitions,
            start_state: definition.start_state,
            final_states: definition.final_states,
            trap_states: definition.trap_states,
        }
    }

    /// All states.
    pub fn states(&self) -> &BTreeSet<StateId> {
        &self.states
    }

    /// Input symbols.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// The full transition function.
    pub fn transitions(&self) -> &BTreeMap<StateId, BTreeMap<char, StateId>> {
        &self.transitions
    }

    /// Where every simulation begins.
    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    /// Accepting states.
    pub fn final_states(&self) -> &BTreeSet<StateId> {
        &self.final_states
    }

    /// States that reject on entry.
    pub fn trap_states(&self) -> &BTreeSet<StateId> {
        &self.trap_states
    }

    /// Check whether `state` belongs to this automaton.
    pub fn contains_state(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    /// Check whether `symbol` is part of the alphabet.
    pub fn accepts_symbol(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// Check whether `state` is accepting.
    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(&state)
    }

    /// Check whether `state` is a trap.
    pub fn is_trap(&self, state: StateId) -> bool {
        self.trap_states.contains(&state)
    }

    /// Outgoing transitions of `state`, if it has any.
    ///
    /// Always `Some` for non-final states. Final states may have no row.
    pub fn row(&self, state: StateId) -> Option<&BTreeMap<char, StateId>> {
        self.transitions.get(&state)
    }

    /// Target of the transition from `state` on `symbol`.
    pub fn next_state(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.row(state).and_then(|row| row.get(&symbol)).copied()
    }

    /// Run `input` through the automaton and record the full trajectory.
    pub fn simulate(&self, input: &str) -> Trace {
        simulation::simulate(self, input)
    }

    /// Shorthand for `self.simulate(input).accepted`.
    pub fn accepts(&self, input: &str) -> bool {
        self.simulate(input).accepted
    }

    /// Describe the automaton with every set in sorted order.
    pub fn properties(&self) -> AutomatonProperties {
        AutomatonProperties {
            states: self.states.iter().copied().collect(),
            alphabet: self.alphabet.iter().copied().collect(),
            transitions: self.transitions.clone(),
            start_state: self.start_state,
            final_states: self.final_states.iter().copied().collect(),
            trap_states: self.trap_states.iter().copied().collect(),
        }
    }

    /// Turn the automaton back into the definition it was built from.
    pub fn to_definition(&self) -> AutomatonDefinition {
        AutomatonDefinition {
            states: self.states.clone(),
            alphabet: self.alphabet.iter().copied().map(String::from).collect(),
            transitions: self
                .transitions
                .iter()
                .map(|(&state, row)| {
                    let row = row
                        .iter()
                        .map(|(&symbol, &target)| (String::from(symbol), target))
                        .collect();
                    (state, row)
                })
                .collect(),
            start_state: self.start_state,
            final_states: self.final_states.clone(),
            trap_states: self.trap_states.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{alphabet_of, state_set};
    use crate::transitions;

    fn parity() -> AutomatonDefinition {
        AutomatonDefinition {
            states: state_set(0..=2),
            alphabet: alphabet_of(['0', '1']),
            transitions: transitions! {
                0 => { '0' => 0, '1' => 1 },
                1 => { '0' => 1, '1' => 0 },
            },
            start_state: StateId::new(0),
            final_states: state_set([1, 2]),
            trap_states: state_set([]),
        }
    }

    #[test]
    fn build_rejects_unknown_start_state() {
        let mut definition = parity();
        definition.start_state = StateId::new(5);

        assert_eq!(
            Automaton::build(definition),
            Err(ConstructionError::UnknownStartState {
                state: StateId::new(5)
            })
        );
    }

    #[test]
    fn build_rejects_empty_states_before_anything_else() {
        let mut definition = parity();
        definition.states.clear();

        assert_eq!(
            Automaton::build(definition),
            Err(ConstructionError::EmptyStates)
        );
    }

    #[test]
    fn build_reports_first_audit_violation() {
        let mut definition = parity();
        definition.trap_states = state_set([7]);
        definition.alphabet.insert("2".to_string());

        let first = Automaton::build(definition.clone()).unwrap_err();

        match Automaton::audit(&definition) {
            Validation::Failure(errors) => {
                assert_eq!(errors.iter().next(), Some(&first));
                assert!(errors.len() > 1);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn built_automaton_is_total_outside_final_states() {
        let automaton = Automaton::build(parity()).unwrap();

        for &state in automaton.states() {
            if automaton.is_final(state) {
                continue;
            }
            for &symbol in automaton.alphabet() {
                assert!(automaton.next_state(state, symbol).is_some());
            }
        }
    }

    #[test]
    fn final_states_may_omit_transitions() {
        let automaton = Automaton::build(parity()).unwrap();

        assert!(automaton.row(StateId::new(2)).is_none());
        assert_eq!(automaton.next_state(StateId::new(2), '0'), None);
    }

    #[test]
    fn accessors_reflect_definition() {
        let automaton = Automaton::build(parity()).unwrap();

        assert_eq!(automaton.start_state(), StateId::new(0));
        assert_eq!(automaton.states().len(), 3);
        assert!(automaton.accepts_symbol('1'));
        assert!(!automaton.accepts_symbol('2'));
        assert!(automaton.contains_state(StateId::new(2)));
        assert!(!automaton.contains_state(StateId::new(3)));
        assert!(automaton.trap_states().is_empty());
    }

    #[test]
    fn properties_are_sorted() {
        let automaton = Automaton::build(parity()).unwrap();
        let properties = automaton.properties();

        assert_eq!(
            properties.states,
            vec![StateId::new(0), StateId::new(1), StateId::new(2)]
        );
        assert_eq!(properties.alphabet, vec!['0', '1']);
        assert_eq!(properties.final_states, vec![StateId::new(1), StateId::new(2)]);
    }

    #[test]
    fn properties_serialize_with_string_keys() {
        let automaton = Automaton::build(parity()).unwrap();
        let json = serde_json::to_value(automaton.properties()).unwrap();

        assert_eq!(json["transitions"]["0"]["1"], 1);
        assert_eq!(json["alphabet"][0], "0");
        assert_eq!(json["start_state"], 0);
    }

    #[test]
    fn to_definition_rebuilds_same_automaton() {
        let automaton = Automaton::build(parity()).unwrap();
        let rebuilt = Automaton::build(automaton.to_definition()).unwrap();

        assert_eq!(automaton, rebuilt);
        assert_eq!(automaton.to_definition(), parity());
    }
}
