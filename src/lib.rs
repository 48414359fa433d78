//! # Dialkey: Name Indexing and Dial-Pad Match Engine
//!
//! A locale-aware engine for finding a contact by typing either normal text or
//! a numeric dial-pad sequence, and for highlighting the matched part of the
//! name.
//!
//! ## Three Building Blocks
//!
//! 1. **Script Classifier** - guesses the naming convention from codepoints
//!    - `classify("李雷")` → `NameStyle::Chinese`
//! 2. **Lookup-Key Generator** - digit-encodes transliterated fragments with
//!    positional metadata, memoized per name
//!    - 李雷 → keys with digits `"54"` and `"534"`
//! 3. **Matcher & Highlighter** - matches a digit or text query against a name
//!    and returns the character range to emphasise
//!    - contiguous pass first, initials-only pass second
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use dialkey::{Language, LiteralTokenizer, NameSearch, NameStyle};
//!
//! // Chinese interpretation: Western names get digit lookup keys too
//! let search = NameSearch::with_language(Arc::new(LiteralTokenizer), Language::Chinese);
//!
//! assert_eq!(search.classify("John Smith"), NameStyle::Western);
//!
//! // Typing 76 ("Sm") highlights the start of "Smith"
//! assert_eq!(search.highlight_digits("John Smith", "76"), Some(5..7));
//!
//! // Typing 57 ("J" then "S") matches the initials across both words
//! assert_eq!(search.highlight_digits("John Smith", "57"), Some(0..10));
//!
//! // Plain-text prefix search is word-boundary aware
//! assert_eq!(search.highlight_prefix("John Smith", "sm"), Some(5..7));
//!
//! // No match: show the name unmodified
//! assert_eq!(search.highlight_digits("John Smith", "999"), None);
//! ```
//!
//! Ideograph names need a phonetic transliterator plugged in through the
//! [`Transliterator`] trait; the built-in [`LiteralTokenizer`] only segments
//! literal text and whitespace.
//!
//! ## Architecture
//!
//! - **script** - codepoint-block classifier and style resolver
//! - **keypad** - static letter→digit table
//! - **translit** - token schema and the transliterator boundary
//! - **keys** - per-style key generation and the process-wide cache
//! - **matcher** - two-pass digit matching as pure state machines
//! - **format** - word-prefix and literal substring primitives
//! - **search** - `NameSearch`, the embedding API

pub mod format;
pub mod keypad;
pub mod keys;
pub mod matcher;
pub mod script;
pub mod search;
pub mod translit;
pub mod types;

// Re-export main types and functions for convenience
pub use keypad::Keypad;
pub use keys::{Generator, KeyCache};
pub use matcher::match_digits;
pub use script::{classify, resolve};
pub use search::NameSearch;
pub use translit::{LiteralTokenizer, Token, Transliterator};
pub use types::{EncodeError, Language, LookupKey, NameStyle, TokenKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
