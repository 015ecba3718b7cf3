mod ast;
mod error;
mod parser;

pub use ast::{ByteSet, Repeat, Token, TokenSequence};
pub use error::{SyntaxError, SyntaxResult};
pub use parser::{parse, parse_with_limit};
