//! Byte-offset views into the parsed input.
//!
//! A `Span` is the detached form of a borrowed slice: it carries no
//! lifetime, so it can be stored after the parser is gone and resolved
//! against the original buffer later.

/// A half-open byte range `[start, end)` into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Length of the span in bytes. Zero if `end` precedes `start`.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the span against the buffer it was produced from.
    ///
    /// Returns `None` if the span does not fit inside `input`.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> Option<&'a [u8]> {
        input.get(self.start..self.end)
    }
}
