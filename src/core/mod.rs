//! Core automaton types.
//!
//! This module contains the validated, immutable DFA and its state
//! identifiers. Values here are read-only once built: an [`Automaton`] can
//! be shared freely between threads and simulations.

mod automaton;
pub(crate) mod state;

pub use automaton::{Automaton, AutomatonProperties};
pub use state::StateId;
