use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_PATTERN_LEN: usize = 64 * 1024;
pub const DEFAULT_MAX_STATES: usize = 1 << 20;
/// Token tree height accepted by default. Parsing, compiling and dropping a
/// token tree recurse once per level, so this also bounds their stack use.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;
// global start + global terminal
const MIN_STATES: usize = 2;

/// Compile-time resource limits. Matching itself is never limited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexOptions {
    pub max_pattern_len: usize,
    pub max_states: usize,
    pub max_nesting_depth: usize,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self {
            max_pattern_len: DEFAULT_MAX_PATTERN_LEN,
            max_states: DEFAULT_MAX_STATES,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl RegexOptions {
    pub fn builder() -> RegexOptionsBuilder {
        RegexOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RegexOptionsError> {
        if self.max_pattern_len == 0 {
            return Err(RegexOptionsError::MaxPatternLenInvalid { provided: 0 });
        }
        if self.max_states < MIN_STATES {
            return Err(RegexOptionsError::MaxStatesInvalid {
                provided: self.max_states,
                min: MIN_STATES,
            });
        }
        if self.max_nesting_depth == 0 {
            return Err(RegexOptionsError::MaxNestingDepthInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RegexOptionsBuilder {
    options: RegexOptions,
}

impl RegexOptionsBuilder {
    pub fn max_pattern_len(mut self, value: usize) -> Self {
        self.options.max_pattern_len = value;
        self
    }

    pub fn max_states(mut self, value: usize) -> Self {
        self.options.max_states = value;
        self
    }

    pub fn max_nesting_depth(mut self, value: usize) -> Self {
        self.options.max_nesting_depth = value;
        self
    }

    pub fn build(self) -> Result<RegexOptions, RegexOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegexOptionsError {
    #[error("max_pattern_len must be at least 1 (got {provided})")]
    MaxPatternLenInvalid { provided: usize },
    #[error("max_states must be at least {min} (got {provided})")]
    MaxStatesInvalid { provided: usize, min: usize },
    #[error("max_nesting_depth must be at least 1 (got {provided})")]
    MaxNestingDepthInvalid { provided: usize },
}
