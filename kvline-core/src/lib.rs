//! kvline Core Parser
//!
//! Single-pass, allocation-free parser for delimited lines of the form
//! `key1=value1;key2=value2`. Entries are zero-copy views into the input.
//!
//! # Architecture
//!
//! - **parser.rs** - `LineParser` cursor and its state machine
//! - **entry.rs** - Borrowed, offset, and owned entry types
//! - **span.rs** - Byte-offset views
//! - **options.rs** - Delimiters and malformed-segment policy
//! - **error.rs** - Configuration and parse errors
//!
//! # Example
//!
//! ```
//! use kvline_core::LineParser;
//!
//! let mut parser = LineParser::new(b"host=db1;port=5432");
//! while let Some(entry) = parser.next_entry() {
//!     println!("{:?} = {:?}", entry.key_str(), entry.value_str());
//! }
//! ```

pub mod entry;
pub mod error;
pub mod options;
pub mod parser;
pub mod span;

pub use entry::{Entry, EntrySpan, OwnedEntry};
pub use error::{ConfigError, ParseError};
pub use options::{Delimiters, MalformedPolicy, ParserOptions};
pub use parser::{count_entries, LineParser};
pub use span::Span;
