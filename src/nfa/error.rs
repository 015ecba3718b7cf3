use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("automaton would exceed the configured limit of {limit} states")]
    StateLimitExceeded { limit: usize },
}

pub type CompileResult<T> = Result<T, CompileError>;
