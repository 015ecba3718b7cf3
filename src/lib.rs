//! Regular-expression engine: a recursive-descent parser produces a token
//! tree, a compiler turns it into a Thompson-style NFA, and a backtracking
//! matcher tests whether a subject matches the pattern in full.
//!
//! ```
//! use nfa_regex_rs::Regex;
//!
//! let re = Regex::new("a{2,4}(b|c)*").unwrap();
//! assert!(re.is_match("aaabcb"));
//! assert!(!re.is_match("abc"));
//! ```

pub mod cache;
mod engine;
pub mod errors;
pub mod matcher;
pub mod nfa;
pub mod options;
pub mod syntax;

pub use cache::RegexCache;
pub use engine::Regex;
pub use errors::{RegexError, RegexResult};
pub use matcher::{is_match, is_match_bytes};
pub use nfa::{Automaton, CompileError, compile};
pub use options::{RegexOptions, RegexOptionsBuilder, RegexOptionsError};
pub use syntax::{SyntaxError, Token, TokenSequence, parse};
