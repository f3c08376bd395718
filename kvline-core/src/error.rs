//! Configuration and parse errors.

use thiserror::Error;

use crate::span::Span;

/// Invalid parser configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("delimiter {0:?} is not ASCII")]
    NonAsciiDelimiter(char),
    #[error("pair and key/value separators are both {0:?}")]
    SameDelimiter(char),
}

/// A pair-segment that could not be split into key and value.
///
/// The parser's pull operation reports this only as exhaustion; the
/// strict form and [`LineParser::malformed`](crate::LineParser::malformed)
/// surface it as a value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("segment at {}..{} has no key/value separator", .segment.start, .segment.end)]
    MissingKvSeparator { segment: Span },
}

impl ParseError {
    /// Span of the offending segment in the original input.
    pub fn span(&self) -> Span {
        match self {
            ParseError::MissingKvSeparator { segment } => *segment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::NonAsciiDelimiter('é').to_string(),
            "delimiter 'é' is not ASCII"
        );
        assert_eq!(
            ConfigError::SameDelimiter(';').to_string(),
            "pair and key/value separators are both ';'"
        );
        let err = ParseError::MissingKvSeparator { segment: Span::new(4, 7) };
        assert_eq!(err.to_string(), "segment at 4..7 has no key/value separator");
        assert_eq!(err.span(), Span::new(4, 7));
    }
}
