//! Test infrastructure for the kvline parser
//!
//! Provides stochastic line generation and small collection helpers.

#![allow(dead_code)]

mod generators;

#[allow(unused_imports)]
pub use generators::Gen;

use kvline_core::{LineParser, ParserOptions};

/// Collect every entry as owned `(key, value)` strings (lossy UTF-8).
pub fn collect_pairs(input: &[u8], options: ParserOptions) -> Vec<(String, String)> {
    LineParser::with_options(input, options)
        .map(|e| {
            (
                String::from_utf8_lossy(e.key).into_owned(),
                String::from_utf8_lossy(e.value).into_owned(),
            )
        })
        .collect()
}
