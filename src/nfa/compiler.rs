use super::automaton::{Automaton, AutomatonBuilder};
use super::error::CompileResult;
use super::state::{StateFlags, StateId};
use crate::options::DEFAULT_MAX_STATES;
use crate::syntax::{ByteSet, Repeat, Token, TokenSequence};

/// (entry, exit) pair produced for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fragment {
    entry: StateId,
    exit: StateId,
}

pub fn compile(tokens: &TokenSequence) -> CompileResult<Automaton> {
    compile_with_limit(tokens, DEFAULT_MAX_STATES)
}

/// Chains the top-level fragments and wraps them with the global start and
/// terminal states.
#[tracing::instrument(level = "trace", skip(tokens), fields(tokens = tokens.len() as u64))]
pub fn compile_with_limit(tokens: &TokenSequence, max_states: usize) -> CompileResult<Automaton> {
    let mut compiler = Compiler {
        builder: AutomatonBuilder::new(max_states),
    };

    let body = compiler.compile_sequence(tokens.tokens())?;
    let start = compiler.builder.add_state()?;
    let terminal = compiler.builder.add_state()?;
    compiler.builder.mark(start, StateFlags::START);
    compiler.builder.mark(terminal, StateFlags::TERMINAL);
    compiler.builder.add_epsilon(start, body.entry);
    compiler.builder.add_epsilon(body.exit, terminal);

    tracing::event!(
        tracing::Level::TRACE,
        operation = "compile",
        states = compiler.builder.state_count() as u64
    );
    Ok(compiler.builder.finish(start))
}

struct Compiler {
    builder: AutomatonBuilder,
}

impl Compiler {
    fn compile_token(&mut self, token: &Token) -> CompileResult<Fragment> {
        match token {
            Token::Literal(byte) => self.compile_literal(*byte),
            Token::CharClass(set) => self.compile_class(set),
            Token::Sequence(tokens) => self.compile_sequence(tokens),
            Token::Alternation(left, right) => self.compile_alternation(left, right),
            Token::Repeat(repeat) => self.compile_repeat(repeat),
        }
    }

    fn fresh(&mut self) -> CompileResult<Fragment> {
        Ok(Fragment {
            entry: self.builder.add_state()?,
            exit: self.builder.add_state()?,
        })
    }

    fn compile_literal(&mut self, byte: u8) -> CompileResult<Fragment> {
        let frag = self.fresh()?;
        self.builder.add_transition(frag.entry, byte, frag.exit);
        Ok(frag)
    }

    fn compile_class(&mut self, set: &ByteSet) -> CompileResult<Fragment> {
        let frag = self.fresh()?;
        for byte in set.iter() {
            self.builder.add_transition(frag.entry, byte, frag.exit);
        }
        Ok(frag)
    }

    /// The fragment of the first token is extended in place; an empty
    /// sequence is a single epsilon edge.
    fn compile_sequence(&mut self, tokens: &[Token]) -> CompileResult<Fragment> {
        let Some((first, rest)) = tokens.split_first() else {
            let frag = self.fresh()?;
            self.builder.add_epsilon(frag.entry, frag.exit);
            return Ok(frag);
        };

        let mut frag = self.compile_token(first)?;
        for token in rest {
            let next = self.compile_token(token)?;
            self.builder.add_epsilon(frag.exit, next.entry);
            frag.exit = next.exit;
        }
        Ok(frag)
    }

    fn compile_alternation(&mut self, left: &Token, right: &Token) -> CompileResult<Fragment> {
        let frag = self.fresh()?;
        let lhs = self.compile_token(left)?;
        let rhs = self.compile_token(right)?;

        self.builder.add_epsilon(frag.entry, lhs.entry);
        self.builder.add_epsilon(frag.entry, rhs.entry);
        self.builder.add_epsilon(lhs.exit, frag.exit);
        self.builder.add_epsilon(rhs.exit, frag.exit);
        Ok(frag)
    }

    /// Unrolls `copy_count` clones of the inner token. Clones past `min` get a
    /// bypass to the exit; an unbounded repeat adds a back-edge from the exit
    /// to the entry of the last clone.
    fn compile_repeat(&mut self, repeat: &Repeat) -> CompileResult<Fragment> {
        let frag = self.fresh()?;
        if repeat.min == 0 {
            self.builder.add_epsilon(frag.entry, frag.exit);
        }

        let copies = repeat.copy_count();
        if copies == 0 {
            return Ok(frag);
        }

        let mut last = self.compile_token(&repeat.inner)?;
        self.builder.add_epsilon(frag.entry, last.entry);

        for i in 2..=copies {
            let clone = self.compile_token(&repeat.inner)?;
            self.builder.add_epsilon(last.exit, clone.entry);
            last = clone;
            if i > repeat.min {
                self.builder.add_epsilon(clone.entry, frag.exit);
            }
        }

        self.builder.add_epsilon(last.exit, frag.exit);
        if repeat.is_unbounded() {
            self.builder.add_epsilon(frag.exit, last.entry);
        }
        Ok(frag)
    }
}
