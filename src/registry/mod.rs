//! Named automata, built once and shared by reference.
//!
//! The registry is the boundary between callers that know automata by
//! name and the core, which only ever sees a built [`Automaton`]. It is an
//! ordinary value: build it at startup, then hand `&Registry` (or an
//! `Arc<Registry>`) to whatever serves requests. Nothing in it changes
//! after population, so lookups and runs need no locking.
//!
//! Unlike the core, the registry logs: registrations at `info`,
//! construction failures at `error` (with the error text verbatim),
//! unknown names at `warn` and each run at `debug`.

pub mod error;

pub use error::RegistryError;

use crate::catalog::{self, CatalogFile, NamedDefinition};
use crate::core::{Automaton, StateId};
use crate::simulation::Trace;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// A built automaton and its registration metadata.
#[derive(Clone, Debug)]
pub struct RegisteredAutomaton {
    name: String,
    description: Option<String>,
    automaton: Automaton,
    registered_at: DateTime<Utc>,
}

/// Compact, serializable overview of a registry entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntrySummary {
    pub name: String,
    pub description: Option<String>,
    pub states: usize,
    pub alphabet: Vec<char>,
    pub start_state: StateId,
    pub final_states: Vec<StateId>,
    pub trap_states: Vec<StateId>,
    pub registered_at: DateTime<Utc>,
}

impl RegisteredAutomaton {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn summary(&self) -> EntrySummary {
        EntrySummary {
            name: self.name.clone(),
            description: self.description.clone(),
            states: self.automaton.states().len(),
            alphabet: self.automaton.alphabet().iter().copied().collect(),
            start_state: self.automaton.start_state(),
            final_states: self.automaton.final_states().iter().copied().collect(),
            trap_states: self.automaton.trap_states().iter().copied().collect(),
            registered_at: self.registered_at,
        }
    }
}

/// Name-indexed collection of built automata.
///
/// # Example
///
/// ```rust
/// use dfa_trace::registry::Registry;
///
/// let registry = Registry::with_catalog();
/// let trace = registry.run("bets", "aaababaabb").unwrap();
///
/// assert!(trace.accepted);
/// assert!(registry.run("unknown", "ab").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: BTreeMap<String, RegisteredAutomaton>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in automaton.
    pub fn with_catalog() -> Self {
        let mut registry = Self::new();
        registry.register_all(catalog::builtin());
        registry
    }

    /// Build and register one automaton.
    ///
    /// A definition that fails validation is logged and reported, and the
    /// registry is left unchanged.
    pub fn register(
        &mut self,
        named: NamedDefinition,
    ) -> Result<&RegisteredAutomaton, RegistryError> {
        let NamedDefinition {
            name,
            description,
            definition,
        } = named;

        if self.entries.contains_key(&name) {
            warn!(automaton = %name, "automaton_duplicate_name");
            return Err(RegistryError::DuplicateName { name });
        }

        let automaton = match Automaton::build(definition) {
            Ok(automaton) => automaton,
            Err(source) => {
                error!(automaton = %name, error = %source, "automaton_construction_failed");
                return Err(RegistryError::Construction { name, source });
            }
        };

        info!(
            automaton = %name,
            states = automaton.states().len(),
            symbols = automaton.alphabet().len(),
            "automaton_registered"
        );

        let entry = RegisteredAutomaton {
            name: name.clone(),
            description,
            automaton,
            registered_at: Utc::now(),
        };
        Ok(self.entries.entry(name).or_insert(entry))
    }

    /// Register every definition, continuing past failures.
    /// Returns the errors for the definitions that were skipped.
    pub fn register_all<I>(&mut self, definitions: I) -> Vec<RegistryError>
    where
        I: IntoIterator<Item = NamedDefinition>,
    {
        definitions
            .into_iter()
            .filter_map(|named| self.register(named).err())
            .collect()
    }

    /// Register every automaton in a JSON definition file.
    ///
    /// Fails only if the file cannot be read or parsed. Definitions that do
    /// not build are skipped and returned.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<RegistryError>, RegistryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&contents)?;

        debug!(
            path = %path.display(),
            definitions = file.automata.len(),
            "definition_file_loaded"
        );

        Ok(self.register_all(file.automata))
    }

    /// Look up an automaton by name.
    pub fn get(&self, name: &str) -> Result<&RegisteredAutomaton, RegistryError> {
        self.entries.get(name).ok_or_else(|| {
            warn!(automaton = %name, "automaton_not_found");
            RegistryError::UnknownAutomaton {
                name: name.to_string(),
            }
        })
    }

    /// Simulate `input` on the automaton registered as `name`.
    ///
    /// The only error is an unknown name; rejection of the input is
    /// reported inside the returned [`Trace`].
    pub fn run(&self, name: &str, input: &str) -> Result<Trace, RegistryError> {
        let entry = self.get(name)?;
        let trace = entry.automaton.simulate(input);

        debug!(
            automaton = %name,
            accepted = trace.accepted,
            consumed = trace.consumed(),
            halt = ?trace.halt(),
            "automaton_run"
        );

        Ok(trace)
    }

    /// Registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Registered entries, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredAutomaton> + '_ {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
