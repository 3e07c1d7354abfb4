//! Registry error types.

use crate::builder::ConstructionError;
use thiserror::Error;

/// Errors that can occur while populating or querying a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No automaton is registered under this name
    #[error("Unknown automaton '{name}'")]
    UnknownAutomaton { name: String },

    /// An automaton with this name is already registered
    #[error("An automaton named '{name}' is already registered")]
    DuplicateName { name: String },

    /// The definition does not describe a valid DFA
    #[error("Error compiling automaton '{name}': {source}")]
    Construction {
        name: String,
        #[source]
        source: ConstructionError,
    },

    /// Reading a definition file failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A definition file is not valid JSON for the catalog format
    #[error("definition file parse error: {0}")]
    Json(#[from] serde_json::Error),
}
