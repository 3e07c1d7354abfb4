//! Fluent builder for automata.

use crate::builder::definition::{AutomatonDefinition, TransitionTable};
use crate::builder::error::ConstructionError;
use crate::core::{Automaton, StateId};
use std::collections::BTreeSet;

/// Builder for constructing automata with a fluent API.
///
/// The builder only collects parts; every invariant is checked once, in
/// [`build`](Self::build), by the same validation that guards
/// [`Automaton::build`].
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<String>,
    transitions: TransitionTable,
    start: Option<StateId>,
    finals: BTreeSet<StateId>,
    traps: BTreeSet<StateId>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single state.
    pub fn state(mut self, id: u32) -> Self {
        self.states.insert(StateId::new(id));
        self
    }

    /// Add several states at once.
    pub fn states<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.states.extend(ids.into_iter().map(StateId::new));
        self
    }

    /// Add a single input symbol.
    pub fn symbol(mut self, symbol: char) -> Self {
        self.alphabet.insert(String::from(symbol));
        self
    }

    /// Add several input symbols at once.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.alphabet.extend(symbols.into_iter().map(String::from));
        self
    }

    /// Add one transition, replacing any earlier one for the same pair.
    pub fn transition(mut self, from: u32, symbol: char, to: u32) -> Self {
        self.transitions
            .entry(StateId::new(from))
            .or_default()
            .insert(String::from(symbol), StateId::new(to));
        self
    }

    /// Merge a whole table, usually written with [`transitions!`](crate::transitions).
    pub fn table(mut self, table: TransitionTable) -> Self {
        for (from, row) in table {
            self.transitions.entry(from).or_default().extend(row);
        }
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, id: u32) -> Self {
        self.start = Some(StateId::new(id));
        self
    }

    /// Mark a state as accepting.
    pub fn final_state(mut self, id: u32) -> Self {
        self.finals.insert(StateId::new(id));
        self
    }

    /// Mark several states as accepting.
    pub fn finals<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.finals.extend(ids.into_iter().map(StateId::new));
        self
    }

    /// Mark a state as a trap.
    pub fn trap(mut self, id: u32) -> Self {
        self.traps.insert(StateId::new(id));
        self
    }

    /// Mark several states as traps.
    pub fn traps<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.traps.extend(ids.into_iter().map(StateId::new));
        self
    }

    /// Finish collecting parts without validating them.
    ///
    /// A start state is required. An empty state set is reported ahead of a
    /// missing start, in the same order [`Automaton::build`] checks them.
    pub fn definition(self) -> Result<AutomatonDefinition, ConstructionError> {
        if self.states.is_empty() {
            return Err(ConstructionError::EmptyStates);
        }
        let start_state = self.start.ok_or(ConstructionError::MissingStartState)?;

        Ok(AutomatonDefinition {
            states: self.states,
            alphabet: self.alphabet,
            transitions: self.transitions,
            start_state,
            final_states: self.finals,
            trap_states: self.traps,
        })
    }

    /// Build the automaton.
    /// Returns the first violated invariant if the parts do not form a DFA.
    pub fn build(self) -> Result<Automaton, ConstructionError> {
        Automaton::build(self.definition()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transitions;

    #[test]
    fn builder_requires_start_state() {
        let result = AutomatonBuilder::new()
            .states(0..=1)
            .alphabet(['a'])
            .build();

        assert!(matches!(result, Err(ConstructionError::MissingStartState)));
    }

    #[test]
    fn empty_builder_reports_empty_states_first() {
        let result = AutomatonBuilder::new().alphabet(['a']).build();
        assert_eq!(result.unwrap_err(), ConstructionError::EmptyStates);

        let result = AutomatonBuilder::new().start(0).build();
        assert_eq!(result.unwrap_err(), ConstructionError::EmptyStates);
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let automaton = AutomatonBuilder::new()
            .states(0..=1)
            .alphabet(['a', 'b'])
            .transition(0, 'a', 1)
            .transition(0, 'b', 0)
            .transition(1, 'a', 1)
            .transition(1, 'b', 0)
            .start(0)
            .final_state(1)
            .build()
            .unwrap();

        assert_eq!(automaton.start_state(), StateId::new(0));
        assert!(automaton.is_final(StateId::new(1)));
        assert_eq!(automaton.next_state(StateId::new(0), 'a'), Some(StateId::new(1)));
    }

    #[test]
    fn table_merges_with_single_transitions() {
        let definition = AutomatonBuilder::new()
            .state(0)
            .symbol('a')
            .symbol('b')
            .table(transitions! { 0 => { 'a' => 0 } })
            .transition(0, 'b', 0)
            .start(0)
            .definition()
            .unwrap();

        let row = &definition.transitions[&StateId::new(0)];
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn later_transition_replaces_earlier_one() {
        let definition = AutomatonBuilder::new()
            .states(0..=2)
            .transition(0, 'a', 1)
            .transition(0, 'a', 2)
            .start(0)
            .definition()
            .unwrap();

        assert_eq!(definition.transitions[&StateId::new(0)]["a"], StateId::new(2));
    }

    #[test]
    fn builder_reports_construction_errors() {
        let result = AutomatonBuilder::new()
            .states(0..=1)
            .alphabet(['a'])
            .transition(0, 'a', 1)
            .start(5)
            .build();

        assert_eq!(
            result.unwrap_err(),
            ConstructionError::UnknownStartState {
                state: StateId::new(5)
            }
        );
    }

    #[test]
    fn traps_and_finals_are_recorded() {
        let definition = AutomatonBuilder::new()
            .states(0..=3)
            .start(0)
            .finals([1, 2])
            .traps([3])
            .trap(2)
            .definition()
            .unwrap();

        assert_eq!(definition.final_states.len(), 2);
        assert_eq!(definition.trap_states.len(), 2);
    }
}
