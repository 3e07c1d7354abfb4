//! Trace records produced by simulation.

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Sentinel appended to a state sequence when a scan stops early.
///
/// Serialized under the names the reference front end expects, e.g.
/// `"REJECT_STATE_TRAP_STATE"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Halt {
    #[serde(rename = "REJECT_STATE_INVALID_SYMBOL")]
    InvalidSymbol,
    #[serde(rename = "REJECT_STATE_NO_TRANSITION")]
    NoTransition,
    #[serde(rename = "REJECT_STATE_INVALID_TARGET")]
    InvalidTarget,
    #[serde(rename = "REJECT_STATE_TRAP_STATE")]
    TrapState,
}

impl Halt {
    /// Wire name of the sentinel.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidSymbol => "REJECT_STATE_INVALID_SYMBOL",
            Self::NoTransition => "REJECT_STATE_NO_TRANSITION",
            Self::InvalidTarget => "REJECT_STATE_INVALID_TARGET",
            Self::TrapState => "REJECT_STATE_TRAP_STATE",
        }
    }
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a state sequence: a visited state or the closing sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    State(StateId),
    Halt(Halt),
}

impl Step {
    /// The visited state, if this step is one.
    pub fn state(&self) -> Option<StateId> {
        match self {
            Self::State(state) => Some(*state),
            Self::Halt(_) => None,
        }
    }

}

/// Why a simulation rejected its input before reaching the end.
///
/// Rejections are ordinary outcomes carried inside a [`Trace`], never
/// returned as `Err`. `position` is the zero-based index, in characters, of
/// the input symbol that caused the stop.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    #[error("Symbol '{symbol}' at position {position} is not in the alphabet")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("State '{state}' has no defined transitions (symbol at position {position})")]
    NoTransition { state: StateId, position: usize },

    #[error("State '{state}' has no transition on symbol '{symbol}' at position {position}")]
    InvalidTarget {
        state: StateId,
        symbol: char,
        position: usize,
    },

    #[error("Symbol '{symbol}' at position {position} leads to trap state '{state}'")]
    TrapState {
        state: StateId,
        symbol: char,
        position: usize,
    },
}

impl Rejection {
    /// The sentinel recorded in the state sequence for this rejection.
    pub fn halt(&self) -> Halt {
        match self {
            Self::InvalidSymbol { .. } => Halt::InvalidSymbol,
            Self::NoTransition { .. } => Halt::NoTransition,
            Self::InvalidTarget { .. } => Halt::InvalidTarget,
            Self::TrapState { .. } => Halt::TrapState,
        }
    }

    /// Input position of the symbol that stopped the scan.
    pub fn position(&self) -> usize {
        match self {
            Self::InvalidSymbol { position, .. }
            | Self::NoTransition { position, .. }
            | Self::InvalidTarget { position, .. }
            | Self::TrapState { position, .. } => *position,
        }
    }
}

/// Full record of one simulation run.
///
/// A trace is created fresh by every call to
/// [`simulate`](crate::simulation::simulate) and owned by the caller.
///
/// On the wire, `error` is the rejection's message text (or `null`) and the
/// typed [`Rejection`] travels alongside it as `rejection`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireTrace", from = "WireTrace")]
pub struct Trace {
    /// The input as given
    pub input: String,
    /// Last state reached
    pub final_state: StateId,
    /// True only if the whole input was read and ended in a final state
    pub accepted: bool,
    /// Visited states in order, plus a trailing sentinel if the scan stopped early
    pub state_sequence: Vec<Step>,
    /// Why the scan stopped early, if it did
    pub error: Option<Rejection>,
}

impl Trace {
    /// Visited states, without the sentinel.
    pub fn visited(&self) -> impl Iterator<Item = StateId> + '_ {
        self.state_sequence.iter().filter_map(Step::state)
    }

    /// Number of input symbols that moved the automaton.
    pub fn consumed(&self) -> usize {
        self.visited().count().saturating_sub(1)
    }

    /// The closing sentinel, if the scan stopped early.
    pub fn halt(&self) -> Option<Halt> {
        match self.state_sequence.last() {
            Some(Step::Halt(halt)) => Some(*halt),
            _ => None,
        }
    }

    /// Check if the scan stopped before the end of the input.
    pub fn stopped_early(&self) -> bool {
        self.error.is_some()
    }

    /// Human-readable rejection cause.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Serialized shape of a [`Trace`].
#[derive(Serialize, Deserialize)]
struct WireTrace {
    input: String,
    final_state: StateId,
    accepted: bool,
    state_sequence: Vec<Step>,
    error: Option<String>,
    rejection: Option<Rejection>,
}

impl From<Trace> for WireTrace {
    fn from(trace: Trace) -> Self {
        Self {
            error: trace.error_message(),
            input: trace.input,
            final_state: trace.final_state,
            accepted: trace.accepted,
            state_sequence: trace.state_sequence,
            rejection: trace.error,
        }
    }
}

impl From<WireTrace> for Trace {
    fn from(wire: WireTrace) -> Self {
        Self {
            input: wire.input,
            final_state: wire.final_state,
            accepted: wire.accepted,
            state_sequence: wire.state_sequence,
            error: wire.rejection,
        }
    }
}
