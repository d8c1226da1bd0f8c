//! Byte ranges into the parsed file.
//!
//! Tokens from the lexer know where they came from; tokens a rewrite
//! synthesizes carry [`Span::DUMMY`]. A node's span covers the tokens it was
//! parsed from, and a rewritten node keeps the span of the node it replaces,
//! so diagnostics on a rewritten tree still point into the original file.

use std::fmt;
use std::ops::Range;

/// A source offset did not fit in `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("source offset {offset} does not fit in a span")]
pub struct SpanError {
    pub offset: usize,
}

/// Half-open byte range `start..end`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span of synthesized syntax.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Span of a lexer match.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        let offset = |offset: usize| u32::try_from(offset).map_err(|_| SpanError { offset });
        Ok(Span::new(offset(range.start)?, offset(range.end)?))
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both; [`Span::DUMMY`] contributes nothing.
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        match (self == Span::DUMMY, other == Span::DUMMY) {
            (true, _) => other,
            (_, true) => self,
            _ => Span::new(self.start.min(other.start), self.end.max(other.end)),
        }
    }

    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
