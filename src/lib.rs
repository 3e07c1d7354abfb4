//! dfa-trace: deterministic finite automata with full state trajectories
//!
//! The crate validates words against predefined DFAs and reports, for
//! every word, whether it was accepted and the exact sequence of states the
//! automaton passed through.
//!
//! The core follows a "validate once, simulate many" shape. Construction
//! checks every DFA invariant up front and yields an immutable
//! [`Automaton`]. Simulation is then a pure function that cannot fail: a
//! word that does not belong to the language produces a rejecting
//! [`Trace`] with a typed [`Rejection`], never an error.
//!
//! # Core Concepts
//!
//! - **Definition**: the raw six-tuple (states, alphabet, transitions,
//!   start, finals, traps), possibly invalid
//! - **Automaton**: a definition that passed validation
//! - **Trace**: the per-call record of visited states and the verdict
//! - **Registry**: named automata, built at startup and shared by reference
//!
//! # Example
//!
//! ```rust
//! use dfa_trace::builder::AutomatonBuilder;
//! use dfa_trace::simulation::{Halt, Step};
//! use dfa_trace::core::StateId;
//!
//! // State 3 is a trap, entered by reading '0' in state 2.
//! let automaton = AutomatonBuilder::new()
//!     .states(0..=3)
//!     .alphabet(['0', '1'])
//!     .transition(0, '0', 2)
//!     .transition(0, '1', 1)
//!     .transition(1, '0', 1)
//!     .transition(1, '1', 0)
//!     .transition(2, '0', 3)
//!     .transition(2, '1', 1)
//!     .transition(3, '0', 3)
//!     .transition(3, '1', 3)
//!     .start(0)
//!     .finals([0, 2])
//!     .trap(3)
//!     .build()
//!     .unwrap();
//!
//! let trace = automaton.simulate("11");
//! assert!(trace.accepted);
//!
//! let trace = automaton.simulate("001");
//! assert!(!trace.accepted);
//! assert_eq!(trace.state_sequence.last(), Some(&Step::Halt(Halt::TrapState)));
//! assert_eq!(trace.final_state, StateId::new(3));
//! ```

pub mod builder;
pub mod catalog;
pub mod core;
pub mod registry;
pub mod simulation;
pub mod validation;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, AutomatonDefinition, ConstructionError};
pub use crate::core::{Automaton, AutomatonProperties, StateId};
pub use registry::{Registry, RegistryError};
pub use simulation::{simulate, Halt, Rejection, Step, Trace};
