//! # bibleref
//!
//! Parses shorthand scripture references ("Gen1.1-2.6", "jud3", "gen-offb")
//! into a normalized, structured form and validates them against canonical
//! book/chapter/verse bounds.
//!
//! The core is [`references::ReferenceParser`] plus the [`books::BookCatalog`]
//! it validates against. Two thin registries ride along: [`versions`] (known
//! translations) and [`servers`] (hosting servers). Everything is built once
//! from static configuration and read-only afterwards, so it can be shared
//! across threads without locking.
//!
//! ```ignore
//! let catalog = BookCatalog::bundled()?;
//! let parser = ReferenceParser::new(&catalog);
//! let parsed = parser.parse("gen1,3");   // passed, FBFCFV, "gen1.3"
//! let parsed = parser.parse("2joh3-5");  // corrected to "2joh1.3-5"
//! ```

pub mod books;
pub mod references;
pub mod servers;
pub mod versions;

pub use books::{readable_form, BookCatalog, BookEntry, ConfigError, Testament};
pub use references::{GrammarType, ParsedReference, ReferenceParser};
pub use servers::{ServerRecord, ServerRegistry};
pub use versions::{VersionRecord, VersionRegistry};
