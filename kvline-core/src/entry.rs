//! Entry types produced by the parser.
//!
//! `Entry<'a>` borrows from the input buffer. `EntrySpan` is the same
//! entry as byte offsets. `OwnedEntry` is an explicit copy for callers
//! that need the data to outlive the buffer.

use std::str::Utf8Error;

use crate::span::Span;

/// A key/value pair borrowed from the input.
///
/// The lifetime `'a` is the input buffer's, not the parser's: entries stay
/// valid after the parser that produced them is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub key: &'a [u8],
    pub value: &'a [u8],
}

impl<'a> Entry<'a> {
    #[inline]
    pub fn new(key: &'a [u8], value: &'a [u8]) -> Self {
        Self { key, value }
    }

    /// Key as UTF-8.
    #[inline]
    pub fn key_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.key)
    }

    /// Value as UTF-8.
    #[inline]
    pub fn value_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.value)
    }

    /// Copy both views into owned storage.
    pub fn to_owned_entry(&self) -> OwnedEntry {
        OwnedEntry {
            key: self.key.to_vec(),
            value: self.value.to_vec(),
        }
    }
}

/// A key/value pair as offsets into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntrySpan {
    pub key: Span,
    pub value: Span,
}

impl EntrySpan {
    /// Resolve both spans against the original input.
    pub fn resolve<'a>(&self, input: &'a [u8]) -> Option<Entry<'a>> {
        Some(Entry::new(self.key.slice(input)?, self.value.slice(input)?))
    }
}

/// A materialized key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnedEntry {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl OwnedEntry {
    /// Borrow as an `Entry`.
    pub fn as_entry(&self) -> Entry<'_> {
        Entry::new(&self.key, &self.value)
    }
}

impl From<Entry<'_>> for OwnedEntry {
    fn from(entry: Entry<'_>) -> Self {
        entry.to_owned_entry()
    }
}
