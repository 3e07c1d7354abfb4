//! Builder API for automaton construction.
//!
//! This module provides the raw [`AutomatonDefinition`] (what a DFA is
//! built from), a fluent [`AutomatonBuilder`], the [`transitions!`](crate::transitions)
//! macro for writing tables inline, and the [`ConstructionError`] every
//! construction path reports.

pub mod automaton;
pub mod definition;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use definition::{alphabet_of, state_set, AutomatonDefinition, TransitionTable};
pub use error::ConstructionError;
