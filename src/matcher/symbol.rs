/// What the matcher sees at a search position. Position 0 is before the
/// subject; position `k >= 1` reads `subject[k - 1]`.
///
/// The anchors are separate variants, so every byte value stays matchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    StartOfText,
    Byte(u8),
    EndOfText,
}

impl Symbol {
    #[inline(always)]
    pub fn at(subject: &[u8], pos: usize) -> Self {
        match pos {
            0 => Symbol::StartOfText,
            _ => match subject.get(pos - 1) {
                Some(byte) => Symbol::Byte(*byte),
                None => Symbol::EndOfText,
            },
        }
    }
}
