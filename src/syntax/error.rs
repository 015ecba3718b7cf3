use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("quantifier '{modifier}' at index {index} of '{pattern}' has no preceding token")]
    DanglingQuantifier {
        pattern: String,
        index: usize,
        modifier: char,
    },
    #[error("group opened at index {start} of '{pattern}' is never closed")]
    UnterminatedGroup { pattern: String, start: usize },
    #[error("character class opened at index {start} of '{pattern}' is never closed")]
    UnterminatedClass { pattern: String, start: usize },
    #[error("quantifier opened at index {start} of '{pattern}' is never closed")]
    UnterminatedQuantifier { pattern: String, start: usize },
    #[error("range operator '-' at index {index} of '{pattern}' is missing an endpoint")]
    DanglingRange { pattern: String, index: usize },
    #[error(
        "there must be either 1 or 2 values specified for the quantifier at index {index} of '{pattern}': provided '{body}' ({fields} fields)"
    )]
    InvalidQuantifierArity {
        pattern: String,
        index: usize,
        body: String,
        fields: usize,
    },
    #[error("quantifier bound '{field}' at index {index} of '{pattern}' is not a non-negative integer")]
    InvalidQuantifierBound {
        pattern: String,
        index: usize,
        field: String,
    },
    #[error("quantifier at index {index} of '{pattern}' has max {max} below min {min}")]
    InvertedQuantifierBounds {
        pattern: String,
        index: usize,
        min: u32,
        max: u32,
    },
    #[error("construct at index {index} of '{pattern}' nests deeper than {limit} levels")]
    NestingTooDeep {
        pattern: String,
        index: usize,
        limit: usize,
    },
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;
