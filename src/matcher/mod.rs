mod backtrack;
mod symbol;

pub use symbol::Symbol;

use crate::nfa::Automaton;
use backtrack::Backtracker;

/// Whole-subject match: the search starts before the first byte and only
/// accepts at the end of the subject.
pub fn is_match(automaton: &Automaton, subject: &str) -> bool {
    is_match_bytes(automaton, subject.as_bytes())
}

#[tracing::instrument(level = "trace", skip(automaton, subject), fields(states = automaton.state_count() as u64, subject_len = subject.len() as u64))]
pub fn is_match_bytes(automaton: &Automaton, subject: &[u8]) -> bool {
    let matched = Backtracker::new(automaton, subject).run();
    tracing::event!(tracing::Level::TRACE, operation = "match", matched);
    matched
}
