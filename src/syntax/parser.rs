use memchr::memchr;
use smallvec::SmallVec;

use super::ast::{ByteSet, Token, TokenSequence};
use super::error::{SyntaxError, SyntaxResult};
use crate::options::DEFAULT_MAX_NESTING_DEPTH;

/// Parses `pattern` into the token list of its outermost scope.
pub fn parse(pattern: &str) -> SyntaxResult<TokenSequence> {
    parse_with_limit(pattern, DEFAULT_MAX_NESTING_DEPTH)
}

/// Like [`parse`], but no token in the result may be nested more than
/// `max_depth` levels deep. Groups, alternation branches and stacked
/// quantifiers each add levels.
#[tracing::instrument(level = "trace", fields(pattern_len = pattern.len() as u64))]
pub fn parse_with_limit(pattern: &str, max_depth: usize) -> SyntaxResult<TokenSequence> {
    let parser = PatternParser::new(pattern, max_depth);
    let cursor = parser.parse_scope(ParseCursor::at(0, 0), None)?;
    debug_assert_eq!(cursor.pos, pattern.len());

    tracing::event!(
        tracing::Level::TRACE,
        operation = "parse",
        tokens = cursor.tokens.len() as u64
    );
    Ok(TokenSequence::new(cursor.tokens))
}

/// Position plus token accumulator for one parse scope (the whole pattern,
/// a group body, or the right-hand side of an alternation).
#[derive(Debug, Default)]
pub(crate) struct ParseCursor {
    pos: usize,
    /// Token levels enclosing this scope's tokens.
    depth: usize,
    tokens: Vec<Token>,
    // tallest token so far, and the height of the last one
    height: usize,
    last_height: usize,
}

impl ParseCursor {
    fn at(pos: usize, depth: usize) -> Self {
        Self {
            pos,
            depth,
            ..Self::default()
        }
    }

    fn push(&mut self, token: Token, height: usize) {
        self.tokens.push(token);
        self.last_height = height;
        self.height = self.height.max(height);
    }
}

struct PatternParser<'a> {
    pattern: &'a str,
    bytes: &'a [u8],
    max_depth: usize,
}

impl<'a> PatternParser<'a> {
    fn new(pattern: &'a str, max_depth: usize) -> Self {
        Self {
            pattern,
            bytes: pattern.as_bytes(),
            max_depth: max_depth.max(1),
        }
    }

    /// Opens a nested scope at `depth`; `index` is the construct that opened it.
    fn enter(&self, pos: usize, depth: usize, index: usize) -> SyntaxResult<ParseCursor> {
        if depth >= self.max_depth {
            return Err(self.too_deep(index));
        }
        Ok(ParseCursor::at(pos, depth))
    }

    fn too_deep(&self, index: usize) -> SyntaxError {
        SyntaxError::NestingTooDeep {
            pattern: self.pattern.to_string(),
            index,
            limit: self.max_depth,
        }
    }

    /// Consumes bytes until `terminator` (left unconsumed) or the pattern end.
    fn parse_scope(
        &self,
        mut cursor: ParseCursor,
        terminator: Option<u8>,
    ) -> SyntaxResult<ParseCursor> {
        while let Some(byte) = self.bytes.get(cursor.pos).copied() {
            if Some(byte) == terminator {
                break;
            }
            match byte {
                b'(' => self.parse_group(&mut cursor)?,
                b'[' => self.parse_class(&mut cursor)?,
                b'|' => self.parse_alternation(&mut cursor, terminator)?,
                b'*' => self.parse_shorthand(&mut cursor, '*', 0, None)?,
                b'+' => self.parse_shorthand(&mut cursor, '+', 1, None)?,
                b'?' => self.parse_shorthand(&mut cursor, '?', 0, Some(1))?,
                b'{' => self.parse_bounds(&mut cursor)?,
                _ => {
                    cursor.push(Token::Literal(byte), 1);
                    cursor.pos += 1;
                }
            }
        }
        Ok(cursor)
    }

    fn parse_group(&self, cursor: &mut ParseCursor) -> SyntaxResult<()> {
        let start = cursor.pos;
        let scope = self.enter(start + 1, cursor.depth + 1, start)?;
        let inner = self.parse_scope(scope, Some(b')'))?;
        if self.bytes.get(inner.pos) != Some(&b')') {
            return Err(SyntaxError::UnterminatedGroup {
                pattern: self.pattern.to_string(),
                start,
            });
        }

        cursor.push(Token::Sequence(inner.tokens), inner.height + 1);
        cursor.pos = inner.pos + 1;
        Ok(())
    }

    /// Everything parsed so far in this scope becomes the left branch; the rest
    /// of the scope becomes the right branch.
    ///
    /// The right branch stops at this scope's own terminator. At top level
    /// there is none, so `a|b)c` reads as `a` or `b)c`, with `)` a literal.
    fn parse_alternation(
        &self,
        cursor: &mut ParseCursor,
        terminator: Option<u8>,
    ) -> SyntaxResult<()> {
        let index = cursor.pos;
        // both branches sit two levels down: the alternation, then a sequence
        let depth = cursor.depth + 2;
        if depth + cursor.height > self.max_depth {
            return Err(self.too_deep(index));
        }
        let scope = self.enter(index + 1, depth, index)?;
        let rhs = self.parse_scope(scope, terminator)?;
        let left = Token::Sequence(std::mem::take(&mut cursor.tokens));
        let height = cursor.height.max(rhs.height) + 2;

        cursor.height = 0;
        cursor.push(Token::alternation(left, Token::Sequence(rhs.tokens)), height);
        cursor.pos = rhs.pos;
        Ok(())
    }

    fn parse_class(&self, cursor: &mut ParseCursor) -> SyntaxResult<()> {
        let start = cursor.pos;
        let body_start = start + 1;
        let Some(rel) = memchr(b']', &self.bytes[body_start..]) else {
            return Err(SyntaxError::UnterminatedClass {
                pattern: self.pattern.to_string(),
                start,
            });
        };
        let close = body_start + rel;
        let body = &self.bytes[body_start..close];

        // (low, high) pairs; a plain member is a one-byte range
        let mut items: SmallVec<[(u8, u8); 8]> = SmallVec::new();
        let mut i = 0usize;
        while i < body.len() {
            let byte = body[i];
            if byte != b'-' {
                items.push((byte, byte));
                i += 1;
                continue;
            }

            let (Some(prev), Some(&next)) = (items.last_mut(), body.get(i + 1)) else {
                return Err(SyntaxError::DanglingRange {
                    pattern: self.pattern.to_string(),
                    index: body_start + i,
                });
            };
            prev.1 = next;
            i += 2;
        }

        let mut set = ByteSet::new();
        for (lo, hi) in items {
            if lo > hi {
                tracing::event!(
                    tracing::Level::DEBUG,
                    operation = "parse_class",
                    low = lo as u64,
                    high = hi as u64,
                    "reversed class range contributes no bytes"
                );
            }
            set.insert_range(lo, hi);
        }

        cursor.push(Token::CharClass(set), 1);
        cursor.pos = close + 1;
        Ok(())
    }

    fn parse_shorthand(
        &self,
        cursor: &mut ParseCursor,
        modifier: char,
        min: u32,
        max: Option<u32>,
    ) -> SyntaxResult<()> {
        let index = cursor.pos;
        self.quantify_last(cursor, index, modifier, min, max)?;
        cursor.pos += 1;
        Ok(())
    }

    fn parse_bounds(&self, cursor: &mut ParseCursor) -> SyntaxResult<()> {
        let start = cursor.pos;
        let Some(rel) = memchr(b'}', &self.bytes[start + 1..]) else {
            return Err(SyntaxError::UnterminatedQuantifier {
                pattern: self.pattern.to_string(),
                start,
            });
        };
        let close = start + 1 + rel;
        // both delimiters are ASCII, so these are char boundaries
        let body = &self.pattern[start + 1..close];
        let fields: SmallVec<[&str; 2]> = body.split(',').collect();

        let (min, max) = match fields.as_slice() {
            [exact] => {
                let value = self.parse_bound(start, exact)?;
                (value, Some(value))
            }
            [lo, hi] => {
                let min = self.parse_bound(start, lo)?;
                let max = if hi.is_empty() {
                    None
                } else {
                    Some(self.parse_bound(start, hi)?)
                };
                (min, max)
            }
            _ => {
                return Err(SyntaxError::InvalidQuantifierArity {
                    pattern: self.pattern.to_string(),
                    index: start,
                    body: body.to_string(),
                    fields: fields.len(),
                });
            }
        };

        if let Some(max) = max
            && max < min
        {
            return Err(SyntaxError::InvertedQuantifierBounds {
                pattern: self.pattern.to_string(),
                index: start,
                min,
                max,
            });
        }

        self.quantify_last(cursor, start, '{', min, max)?;
        cursor.pos = close + 1;
        Ok(())
    }

    fn parse_bound(&self, index: usize, field: &str) -> SyntaxResult<u32> {
        field
            .parse::<u32>()
            .map_err(|_| SyntaxError::InvalidQuantifierBound {
                pattern: self.pattern.to_string(),
                index,
                field: field.to_string(),
            })
    }

    /// Rewrites the scope's last token into a repeat of itself.
    fn quantify_last(
        &self,
        cursor: &mut ParseCursor,
        index: usize,
        modifier: char,
        min: u32,
        max: Option<u32>,
    ) -> SyntaxResult<()> {
        let Some(last) = cursor.tokens.pop() else {
            return Err(SyntaxError::DanglingQuantifier {
                pattern: self.pattern.to_string(),
                index,
                modifier,
            });
        };
        let height = cursor.last_height + 1;
        if cursor.depth + height > self.max_depth {
            return Err(self.too_deep(index));
        }
        cursor.push(Token::repeat(min, max, last), height);
        Ok(())
    }
}
