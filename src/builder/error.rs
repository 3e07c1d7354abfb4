//! Construction errors for automaton definitions.

use crate::core::StateId;
use thiserror::Error;

/// Ways an automaton definition can fail to describe a valid DFA.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("The states of a valid DFA cannot be empty")]
    EmptyStates,

    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("Start state '{state}' is not in the set of states")]
    UnknownStartState { state: StateId },

    #[error("Final state '{state}' is not in the set of states")]
    UnknownFinalState { state: StateId },

    #[error("Trap state '{state}' is not in the set of states")]
    UnknownTrapState { state: StateId },

    #[error("The alphabet of a valid DFA cannot be empty")]
    EmptyAlphabet,

    #[error("Symbol {symbol:?} is not a single character")]
    MalformedSymbol { symbol: String },

    #[error("Transition defined for an unknown source state '{state}'")]
    UnknownSourceState { state: StateId },

    #[error("Transition from state '{state}' uses symbol '{symbol}' not in the alphabet")]
    UnknownSymbol { state: StateId, symbol: char },

    #[error(
        "Transition from state '{state}' on symbol '{symbol}' leads to an unknown state '{target}'"
    )]
    UnknownTargetState {
        state: StateId,
        symbol: char,
        target: StateId,
    },

    #[error(
        "Missing transition for state '{state}' and symbol '{symbol}'. \
         Every non-final state needs a transition for every symbol (or one into a trap state)"
    )]
    MissingTransition { state: StateId, symbol: char },

    #[error("Trap state '{trap}' escapes to '{target}' on symbol '{symbol}'")]
    TrapEscape {
        trap: StateId,
        symbol: char,
        target: StateId,
    },
}
