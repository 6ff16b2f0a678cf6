//! Query-string layout configuration.
//!
//! Parses strings like `?strategy=masonry&spacing=12&w=1920&h=1080` into a
//! [`LayoutRequest`] that overlays the given values on
//! [`LayoutConfig::default()`](crate::LayoutConfig::default).
//!
//! # Example
//!
//! ```
//! use zencollage::{Strategy, query};
//!
//! let result = query::parse("strategy=masonry&spacing=12&margin=0&w=1920&h=1080");
//! assert!(result.warnings.is_empty());
//!
//! let request = result.request;
//! assert_eq!(request.strategy(), Strategy::Masonry);
//! let config = request.config();
//! assert_eq!(config.spacing, 12.0);
//! assert_eq!(config.margin, 0.0);
//! assert_eq!(request.canvas().unwrap().width, 1920.0);
//! ```
//!
//! Parsing never fails: unknown keys, unparseable values, and repeated keys
//! produce [`ParseWarning`]s and the offending pair is otherwise ignored
//! (repeats: last value wins).

mod parse;
mod request;

pub use request::LayoutRequest;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a layout query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed request.
    pub request: LayoutRequest,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a layout query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (request, warnings) = parse::parse_query(query);
    if !warnings.is_empty() {
        log::debug!("layout query {query:?} produced {} warnings", warnings.len());
    }
    ParseResult { request, warnings }
}
