use crate::nfa::CompileError;
use crate::options::RegexOptionsError;
use crate::syntax::SyntaxError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegexError {
    #[error("pattern is {len} bytes long; the configured limit is {limit}")]
    PatternTooLong { len: usize, limit: usize },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Options(#[from] RegexOptionsError),
}

pub type RegexResult<T> = Result<T, RegexError>;
