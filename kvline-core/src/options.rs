//! Construction-time parser configuration.

use crate::error::ConfigError;

/// The two separator bytes recognized by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Separates one `key=value` pair from the next. Default `;`.
    pub pair_separator: u8,
    /// Separates a key from its value. Default `=`.
    pub kv_separator: u8,
}

impl Delimiters {
    /// `;` between pairs, `=` between key and value.
    pub const DEFAULT: Delimiters = Delimiters::from_bytes(b';', b'=');

    /// Validated constructor.
    ///
    /// Both separators must be ASCII so that splitting valid UTF-8 input
    /// always lands on character boundaries, and they must differ.
    pub fn new(pair_separator: char, kv_separator: char) -> Result<Self, ConfigError> {
        for c in [pair_separator, kv_separator] {
            if !c.is_ascii() {
                return Err(ConfigError::NonAsciiDelimiter(c));
            }
        }
        if pair_separator == kv_separator {
            return Err(ConfigError::SameDelimiter(pair_separator));
        }
        Ok(Self::from_bytes(pair_separator as u8, kv_separator as u8))
    }

    /// Unchecked constructor for constants.
    #[inline]
    pub const fn from_bytes(pair_separator: u8, kv_separator: u8) -> Self {
        Self { pair_separator, kv_separator }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What to do with a pair-segment that has no key/value separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Stop at the malformed segment. Everything after it is unreachable.
    #[default]
    Truncate,
    /// Drop the malformed segment and continue with the next one.
    Skip,
}

/// Parser options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    pub delimiters: Delimiters,
    pub on_malformed: MalformedPolicy,
}

impl ParserOptions {
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }
}
