use std::fmt;
use std::sync::Arc;

use crate::errors::{RegexError, RegexResult};
use crate::nfa::{self, Automaton};
use crate::options::RegexOptions;
use crate::syntax;

/// A pattern compiled once and matched any number of times, from any thread.
/// Cloning shares the automaton.
#[derive(Clone)]
pub struct Regex {
    pattern: Arc<str>,
    automaton: Arc<Automaton>,
}

impl Regex {
    pub fn new(pattern: &str) -> RegexResult<Self> {
        Self::with_options(pattern, &RegexOptions::default())
    }

    #[tracing::instrument(level = "trace", skip(options), fields(pattern = %pattern))]
    pub fn with_options(pattern: &str, options: &RegexOptions) -> RegexResult<Self> {
        options.validate()?;
        if pattern.len() > options.max_pattern_len {
            return Err(RegexError::PatternTooLong {
                len: pattern.len(),
                limit: options.max_pattern_len,
            });
        }

        let tokens = syntax::parse_with_limit(pattern, options.max_nesting_depth)?;
        let automaton = nfa::compile_with_limit(&tokens, options.max_states)?;
        Ok(Self {
            pattern: Arc::from(pattern),
            automaton: Arc::new(automaton),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn shared_automaton(&self) -> Arc<Automaton> {
        self.automaton.clone()
    }

    pub fn is_match(&self, subject: &str) -> bool {
        self.automaton.is_match(subject)
    }

    pub fn is_match_bytes(&self, subject: &[u8]) -> bool {
        self.automaton.is_match_bytes(subject)
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &self.pattern)
            .field("states", &self.automaton.state_count())
            .finish()
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl std::str::FromStr for Regex {
    type Err = RegexError;

    fn from_str(pattern: &str) -> RegexResult<Self> {
        Self::new(pattern)
    }
}
