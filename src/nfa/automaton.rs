use super::error::{CompileError, CompileResult};
use super::state::{State, StateFlags, StateId};

/// Compiled pattern: owns every state; edges are arena indices, so the
/// back-edges of unbounded repeats need no shared ownership.
///
/// Immutable once built. Matching only reads it, so one automaton can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    start: StateId,
}

impl Automaton {
    #[inline(always)]
    pub fn start(&self) -> StateId {
        self.start
    }

    /// # Panics
    /// If `id` was not produced by this automaton.
    #[inline(always)]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(idx, state)| (StateId(idx as u32), state))
    }

    pub fn terminal_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states()
            .filter(|(_, state)| state.is_terminal())
            .map(|(id, _)| id)
    }

    pub fn is_match(&self, subject: &str) -> bool {
        crate::matcher::is_match(self, subject)
    }

    pub fn is_match_bytes(&self, subject: &[u8]) -> bool {
        crate::matcher::is_match_bytes(self, subject)
    }
}

#[derive(Debug)]
pub(crate) struct AutomatonBuilder {
    states: Vec<State>,
    max_states: usize,
}

impl AutomatonBuilder {
    pub fn new(max_states: usize) -> Self {
        Self {
            states: Vec::new(),
            max_states: max_states.min(u32::MAX as usize),
        }
    }

    pub fn add_state(&mut self) -> CompileResult<StateId> {
        if self.states.len() >= self.max_states {
            return Err(CompileError::StateLimitExceeded {
                limit: self.max_states,
            });
        }
        let id = StateId(self.states.len() as u32);
        self.states.push(State::default());
        Ok(id)
    }

    #[inline]
    pub fn add_transition(&mut self, from: StateId, byte: u8, to: StateId) {
        self.states[from.index()]
            .transitions
            .entry(byte)
            .or_default()
            .push(to);
    }

    #[inline]
    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from.index()].epsilon.push(to);
    }

    pub fn mark(&mut self, id: StateId, flags: StateFlags) {
        self.states[id.index()].flags.insert(flags);
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn finish(mut self, start: StateId) -> Automaton {
        self.states.shrink_to_fit();
        Automaton {
            states: self.states,
            start,
        }
    }
}
