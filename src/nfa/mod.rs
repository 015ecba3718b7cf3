mod automaton;
mod compiler;
mod error;
mod state;

pub use automaton::Automaton;
pub use compiler::{compile, compile_with_limit};
pub use error::{CompileError, CompileResult};
pub use state::{State, StateFlags, StateId};
