use bitflags::bitflags;
use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;
use std::fmt;

/// Index of a state inside the owning [`Automaton`](super::Automaton) arena.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) u32);

impl StateId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StateFlags: u8 {
        const START = 0b00000001;
        const TERMINAL = 0b00000010;
    }
}

pub(crate) type Targets = SmallVec<[StateId; 2]>;

#[derive(Debug, Default, Clone)]
pub struct State {
    pub(crate) flags: StateFlags,
    // byte -> destinations in insertion order
    pub(crate) transitions: FastHashMap<u8, Targets>,
    // epsilon destinations in insertion order
    pub(crate) epsilon: Targets,
}

impl State {
    #[inline(always)]
    pub fn flags(&self) -> StateFlags {
        self.flags
    }

    #[inline(always)]
    pub fn is_start(&self) -> bool {
        self.flags.contains(StateFlags::START)
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.flags.contains(StateFlags::TERMINAL)
    }

    /// Destinations reachable by consuming `byte`.
    #[inline]
    pub fn targets(&self, byte: u8) -> &[StateId] {
        self.transitions
            .get(&byte)
            .map(|targets| targets.as_slice())
            .unwrap_or(&[])
    }

    #[inline]
    pub fn epsilon_targets(&self) -> &[StateId] {
        &self.epsilon
    }

    /// Bytes with at least one outgoing transition, ascending.
    pub fn symbols(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self.transitions.keys().copied().collect();
        bytes.sort_unstable();
        bytes
    }
}
