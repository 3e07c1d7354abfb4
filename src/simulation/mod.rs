//! Simulation of validated automata.
//!
//! Simulation is a pure function of `(automaton, input)`: it reads the
//! automaton, never mutates it, performs no I/O and always returns a
//! [`Trace`]. The same input against the same automaton always yields an
//! identical trace.

mod simulator;
mod trace;

pub use simulator::simulate;
pub use trace::{Halt, Rejection, Step, Trace};
