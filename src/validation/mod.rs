//! Construction-time validation of automaton definitions.
//!
//! Two entry points share one ordered list of invariant rules:
//!
//! - [`first_violation`] stops at the first broken invariant. This is what
//!   [`Automaton::build`](crate::core::Automaton::build) uses.
//! - [`audit`] runs every rule and accumulates ALL violations using
//!   Stillwater's `Validation`, so a definition author can fix everything in
//!   one pass.
//!
//! Both report violations in the same order, so the error from `build` is
//! always the first error of `audit`.
//!
//! # Example
//!
//! ```rust
//! use dfa_trace::builder::{alphabet_of, state_set, AutomatonDefinition};
//! use dfa_trace::core::StateId;
//! use dfa_trace::validation::audit;
//! use stillwater::validation::Validation;
//!
//! let definition = AutomatonDefinition {
//!     states: state_set(0..=1),
//!     alphabet: alphabet_of([]),
//!     transitions: Default::default(),
//!     start_state: StateId::new(9),
//!     final_states: state_set([]),
//!     trap_states: state_set([]),
//! };
//!
//! match audit(&definition) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => panic!("expected violations"),
//! }
//! ```

mod rules;

use crate::builder::{AutomatonDefinition, ConstructionError};
use rules::RULES;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Return the first violated invariant, if any.
pub fn first_violation(definition: &AutomatonDefinition) -> Option<ConstructionError> {
    RULES
        .iter()
        .find_map(|rule| rule(definition).into_iter().next())
}

/// Every violated invariant, in reporting order.
pub fn violations(definition: &AutomatonDefinition) -> Vec<ConstructionError> {
    RULES.iter().flat_map(|rule| rule(definition)).collect()
}

/// Check all invariants, accumulating ALL violations.
/// Returns `Validation::Success(())` if the definition describes a valid DFA.
pub fn audit(definition: &AutomatonDefinition) -> Validation<(), NonEmptyVec<ConstructionError>> {
    let checks: Vec<Validation<(), NonEmptyVec<ConstructionError>>> = violations(definition)
        .into_iter()
        .map(|violation| Validation::fail(violation))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
