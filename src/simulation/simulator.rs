//! Single-pass trace execution.

use crate::core::{Automaton, StateId};
use crate::simulation::trace::{Rejection, Step, Trace};

/// Run `input` through `automaton`, recording every state visited.
///
/// The scan reads one character per step and stops at the first of:
/// a symbol outside the alphabet, a state without transitions, a missing
/// transition, or entry into a trap state. A stop appends its sentinel to
/// the sequence and records the [`Rejection`]. This function never fails;
/// rejection is a normal outcome reported through the returned [`Trace`].
///
/// # Example
///
/// ```rust
/// use dfa_trace::catalog;
/// use dfa_trace::core::{Automaton, StateId};
/// use dfa_trace::simulation::{simulate, Halt, Step};
///
/// let stars = Automaton::build(catalog::stars().definition).unwrap();
/// let trace = simulate(&stars, "1111a11101");
///
/// assert!(!trace.accepted);
/// assert_eq!(trace.error.as_ref().map(|e| e.position()), Some(4));
/// assert_eq!(trace.state_sequence.last(), Some(&Step::Halt(Halt::InvalidSymbol)));
/// ```
pub fn simulate(automaton: &Automaton, input: &str) -> Trace {
    let mut scanner = Scanner::new(automaton);

    for (position, symbol) in input.chars().enumerate() {
        scanner.feed(position, symbol);
        if scanner.is_stopped() {
            break;
        }
    }

    scanner.finish(input)
}

/// Driver status. `Stopped` is terminal.
#[derive(Debug)]
enum Status {
    Scanning,
    Stopped(Rejection),
}

struct Scanner<'a> {
    automaton: &'a Automaton,
    current: StateId,
    sequence: Vec<Step>,
    status: Status,
}

impl<'a> Scanner<'a> {
    fn new(automaton: &'a Automaton) -> Self {
        let current = automaton.start_state();
        Self {
            automaton,
            current,
            sequence: vec![Step::State(current)],
            status: Status::Scanning,
        }
    }

    fn is_stopped(&self) -> bool {
        matches!(self.status, Status::Stopped(_))
    }

    fn feed(&mut self, position: usize, symbol: char) {
        if !self.automaton.accepts_symbol(symbol) {
            return self.stop(Rejection::InvalidSymbol { symbol, position });
        }

        let Some(row) = self.automaton.row(self.current) else {
            return self.stop(Rejection::NoTransition {
                state: self.current,
                position,
            });
        };

        let next = row
            .get(&symbol)
            .copied()
            .filter(|&target| self.automaton.contains_state(target));
        let Some(next) = next else {
            return self.stop(Rejection::InvalidTarget {
                state: self.current,
                symbol,
                position,
            });
        };

        self.current = next;
        self.sequence.push(Step::State(next));

        // The trap state stays in the sequence ahead of its sentinel.
        if self.automaton.is_trap(next) {
            self.stop(Rejection::TrapState {
                state: next,
                symbol,
                position,
            });
        }
    }

    fn stop(&mut self, rejection: Rejection) {
        self.sequence.push(Step::Halt(rejection.halt()));
        self.status = Status::Stopped(rejection);
    }

    fn finish(self, input: &str) -> Trace {
        let error = match self.status {
            Status::Scanning => None,
            Status::Stopped(rejection) => Some(rejection),
        };
        let accepted = error.is_none() && self.automaton.is_final(self.current);

        Trace {
            input: input.to_string(),
            final_state: self.current,
            accepted,
            state_sequence: self.sequence,
            error,
        }
    }
}
