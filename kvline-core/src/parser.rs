//! Pull-based cursor over a `key=value;key=value` line.
//!
//! The parser holds a borrowed view of the unconsumed suffix of the input
//! and hands out sub-slices of the original buffer. It never copies or
//! allocates.
//!
//! # States
//!
//! ```text
//!            next_entry (more input left)
//!           ┌──────────┐
//!           ▼          │
//!  new ──▶ Active ─────┘
//!           │
//!           │ input consumed, or malformed segment (Truncate)
//!           ▼
//!        Exhausted ──▶ next_entry always returns None
//! ```

use std::iter::FusedIterator;

use memchr::memchr;
use tracing::{debug, trace};

use crate::entry::{Entry, EntrySpan};
use crate::error::ParseError;
use crate::options::{MalformedPolicy, ParserOptions};
use crate::span::Span;

/// Allocation-free key/value line parser.
///
/// Create one per input line and pull entries with [`next_entry`] (or
/// iterate it). Returned entries borrow from the input, not from the
/// parser.
///
/// [`next_entry`]: LineParser::next_entry
#[derive(Debug)]
pub struct LineParser<'a> {
    input: &'a [u8],
    /// Unconsumed suffix of `input`.
    remaining: &'a [u8],
    options: ParserOptions,
    malformed: Option<ParseError>,
}

impl<'a> LineParser<'a> {
    /// Parser with `;` / `=` separators that stops at the first malformed
    /// segment.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    #[inline]
    pub fn with_options(input: &'a [u8], options: ParserOptions) -> Self {
        Self {
            input,
            remaining: input,
            options,
            malformed: None,
        }
    }

    /// Pull the next entry.
    ///
    /// `None` means no further entries: either the input is used up or a
    /// segment without a key/value separator was hit under
    /// [`MalformedPolicy::Truncate`]. Use [`malformed`](Self::malformed) to
    /// tell the two apart.
    #[inline]
    pub fn next_entry(&mut self) -> Option<Entry<'a>> {
        let span = self.next_span()?;
        Some(self.resolve(span))
    }

    /// Like [`next_entry`](Self::next_entry), but yields byte offsets.
    pub fn next_span(&mut self) -> Option<EntrySpan> {
        loop {
            let segment = self.next_segment()?;
            match self.split_segment(segment) {
                Ok(entry) => return Some(entry),
                Err(err) => {
                    self.malformed = Some(err);
                    match self.options.on_malformed {
                        MalformedPolicy::Truncate => {
                            debug!(
                                start = segment.start,
                                end = segment.end,
                                unparsed = self.remaining.len(),
                                policy = ?self.options.on_malformed,
                                "malformed segment, truncating"
                            );
                            self.finish();
                            return None;
                        }
                        MalformedPolicy::Skip => {
                            trace!(
                                start = segment.start,
                                end = segment.end,
                                policy = ?self.options.on_malformed,
                                "skipping malformed segment"
                            );
                        }
                    }
                }
            }
        }
    }

    /// Strict form of [`next_entry`](Self::next_entry).
    ///
    /// A malformed segment is returned as an error and exhausts the parser,
    /// whatever the configured policy.
    pub fn try_next_entry(&mut self) -> Result<Option<Entry<'a>>, ParseError> {
        let Some(segment) = self.next_segment() else {
            return Ok(None);
        };
        match self.split_segment(segment) {
            Ok(span) => Ok(Some(self.resolve(span))),
            Err(err) => {
                debug!(start = segment.start, end = segment.end, "malformed segment");
                self.malformed = Some(err);
                self.finish();
                Err(err)
            }
        }
    }

    /// The last malformed segment encountered, if any.
    #[inline]
    pub fn malformed(&self) -> Option<ParseError> {
        self.malformed
    }

    /// Unconsumed input.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.remaining
    }

    /// Offset of the unconsumed input within the original buffer.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.input.len() - self.remaining.len()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    #[inline]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Cut the next pair-segment off `remaining`, consuming its separator.
    #[inline]
    fn next_segment(&mut self) -> Option<Span> {
        if self.remaining.is_empty() {
            return None;
        }
        let start = self.consumed();
        match memchr(self.options.delimiters.pair_separator, self.remaining) {
            Some(i) => {
                self.remaining = &self.remaining[i + 1..];
                Some(Span::new(start, start + i))
            }
            None => {
                self.finish();
                Some(Span::new(start, self.input.len()))
            }
        }
    }

    #[inline]
    fn split_segment(&self, segment: Span) -> Result<EntrySpan, ParseError> {
        let bytes = &self.input[segment.start..segment.end];
        match memchr(self.options.delimiters.kv_separator, bytes) {
            Some(j) => Ok(EntrySpan {
                key: Span::new(segment.start, segment.start + j),
                value: Span::new(segment.start + j + 1, segment.end),
            }),
            None => Err(ParseError::MissingKvSeparator { segment }),
        }
    }

    #[inline]
    fn resolve(&self, span: EntrySpan) -> Entry<'a> {
        let input = self.input;
        Entry::new(
            &input[span.key.start..span.key.end],
            &input[span.value.start..span.value.end],
        )
    }

    /// Move to the terminal state. `remaining` stays inside the buffer.
    #[inline]
    fn finish(&mut self) {
        self.remaining = &self.input[self.input.len()..];
    }
}

impl<'a> Iterator for LineParser<'a> {
    type Item = Entry<'a>;

    #[inline]
    fn next(&mut self) -> Option<Entry<'a>> {
        self.next_entry()
    }
}

impl FusedIterator for LineParser<'_> {}

/// Count the entries in `input` without materializing them.
pub fn count_entries(input: &[u8], options: ParserOptions) -> usize {
    LineParser::with_options(input, options).count()
}
