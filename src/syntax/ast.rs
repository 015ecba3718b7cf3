use std::fmt;

/// Parsed form of a whole pattern: the token list of the outermost scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    pub tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_token(self) -> Token {
        Token::Sequence(self.tokens)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(u8),
    CharClass(ByteSet),
    /// Parenthesized group or one side of an alternation. Grouping is
    /// structural only.
    Sequence(Vec<Token>),
    Alternation(Box<Token>, Box<Token>),
    Repeat(Repeat),
}

impl Token {
    pub fn alternation(left: Token, right: Token) -> Self {
        Token::Alternation(Box::new(left), Box::new(right))
    }

    pub fn repeat(min: u32, max: Option<u32>, inner: Token) -> Self {
        Token::Repeat(Repeat {
            min,
            max,
            inner: Box::new(inner),
        })
    }
}

/// `max == None` is an unbounded upper limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    pub min: u32,
    pub max: Option<u32>,
    pub inner: Box<Token>,
}

impl Repeat {
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Number of structural copies of `inner` the compiler unrolls.
    pub fn copy_count(&self) -> u32 {
        match self.max {
            Some(max) => max,
            None => self.min.max(1),
        }
    }
}

/// 256-bit membership set over single input bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSet {
    bits: [u64; 4],
}

impl ByteSet {
    pub const fn new() -> Self {
        Self { bits: [0; 4] }
    }

    #[inline]
    pub fn insert(&mut self, byte: u8) {
        self.bits[(byte >> 6) as usize] |= 1u64 << (byte & 63);
    }

    /// Inserts `lo..=hi`; a reversed range inserts nothing.
    pub fn insert_range(&mut self, lo: u8, hi: u8) {
        for byte in lo..=hi {
            self.insert(byte);
        }
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.bits[(byte >> 6) as usize] & (1u64 << (byte & 63)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|word| *word == 0)
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |byte| self.contains(*byte))
    }
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = ByteSet::new();
        for byte in iter {
            set.insert(byte);
        }
        set
    }
}

impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|byte| byte.escape_ascii().to_string()))
            .finish()
    }
}
