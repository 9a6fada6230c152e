//! Reference parsing and validation
//!
//! The entry point is [`parser::ReferenceParser::parse`]: normalize the raw
//! text, match it against the ordered grammar table, apply the
//! one-chapter-book correction, then run the validation pipeline against the
//! book catalog. Every call returns a structured [`parser::ParsedReference`];
//! recoverable failures are reported through `passed = false` plus
//! diagnostics, never through `Err` or a panic.

pub mod grammar;
pub mod messages;
pub mod parser;

pub use grammar::GrammarType;
pub use parser::{ParsedReference, ReferenceParser};
