use super::symbol::Symbol;
use crate::nfa::{Automaton, StateId};

const SEARCH_STACK_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy)]
enum Frame {
    Visit { state: StateId, pos: usize },
    // restores the activation mark once every branch below `state` failed
    Leave { state: StateId, previous: usize },
}

/// Depth-first search over the automaton, one call per subject.
///
/// For each state: accept on end-of-text at a terminal; otherwise try the
/// first destination for the current byte, then every epsilon destination in
/// insertion order (at start-of-text also one position further). Frames live
/// on a heap stack, so deep searches cannot overflow the thread stack; the
/// order and cost are those of the plain recursive search.
pub(super) struct Backtracker<'a> {
    automaton: &'a Automaton,
    subject: &'a [u8],
    // per state: pos + 1 of its innermost activation on the current path, 0 if none
    active: Vec<usize>,
    stack: Vec<Frame>,
}

impl<'a> Backtracker<'a> {
    pub fn new(automaton: &'a Automaton, subject: &'a [u8]) -> Self {
        Self {
            automaton,
            subject,
            active: vec![0; automaton.state_count()],
            stack: Vec::with_capacity(SEARCH_STACK_CAPACITY),
        }
    }

    pub fn run(mut self) -> bool {
        self.stack.push(Frame::Visit {
            state: self.automaton.start(),
            pos: 0,
        });

        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Leave { state, previous } => {
                    self.active[state.index()] = previous;
                }
                Frame::Visit { state, pos } => {
                    if self.visit(state, pos) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Returns true on acceptance; otherwise schedules the branches of `state`.
    fn visit(&mut self, id: StateId, pos: usize) -> bool {
        let mark = pos + 1;
        // re-entered through an epsilon loop without consuming input
        if self.active[id.index()] == mark {
            return false;
        }

        let automaton = self.automaton;
        let symbol = Symbol::at(self.subject, pos);
        let state = automaton.state(id);
        if symbol == Symbol::EndOfText && state.is_terminal() {
            return true;
        }

        let previous = std::mem::replace(&mut self.active[id.index()], mark);
        self.stack.push(Frame::Leave {
            state: id,
            previous,
        });

        // pushed in reverse so they pop in exploration order
        for &next in state.epsilon_targets().iter().rev() {
            if symbol == Symbol::StartOfText {
                self.stack.push(Frame::Visit {
                    state: next,
                    pos: pos + 1,
                });
            }
            self.stack.push(Frame::Visit { state: next, pos });
        }

        if let Symbol::Byte(byte) = symbol
            && let Some(&next) = state.targets(byte).first()
        {
            self.stack.push(Frame::Visit {
                state: next,
                pos: pos + 1,
            });
        }
        false
    }
}
