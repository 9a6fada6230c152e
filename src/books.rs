//! Canonical book catalog
//!
//! Loads the book metadata (abbreviation, chapter count, testament, typeset
//! form, per-chapter verse counts) from a JSON source and exposes a read-only
//! lookup surface. The catalog is built once at startup and never mutated;
//! sharing it across threads needs no synchronization.
//!
//! Two language-fixed tables live here as process-wide constants: the
//! one-chapter books (whose references conventionally omit the chapter) and
//! the Psalms whose liturgical heading counts as verse 1 in some numbering
//! traditions.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// One server is missing all the one-chapter books, and their references
/// conventionally omit the chapter digit. Lookups are case-insensitive.
const ONE_CHAPTER_BOOKS: &[&str] = &["OB", "PHIM", "2JOH", "3JOH", "JUD"];

/// Psalms whose heading is counted as verse 1 in the Masoretic numbering.
/// Translations that do not count the heading are shifted by one verse.
const PSALMS_WITH_HEADING: &[u32] = &[
    3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 14, 15, 16, 19, 20, 21, 22, 30, 31, 34, 36, 39, 40, 41, 42,
    44, 45, 46, 47, 48, 49, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67,
    68, 69, 70, 75, 76, 77, 80, 81, 83, 84, 85, 88, 89, 102, 108, 140, 142,
];

/// The catalog shipped with the crate.
const BUNDLED_BOOKS: &str = include_str!("../data/books.json");

/// Errors that can occur while building the catalog. All of them are fatal:
/// a process must not run with a partially built catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Malformed(String),
    EmptyCatalog,
    DuplicateAbbreviation(String),
    ChapterCountMismatch {
        book: String,
        declared: u32,
        listed: u32,
    },
    NonContiguousChapters {
        book: String,
        expected: u32,
        found: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Failed to read catalog source: {}", msg),
            ConfigError::Malformed(msg) => write!(f, "Malformed catalog source: {}", msg),
            ConfigError::EmptyCatalog => write!(f, "Catalog source contains no books"),
            ConfigError::DuplicateAbbreviation(abbrev) => {
                write!(f, "Duplicate abbreviation '{}' in catalog", abbrev)
            }
            ConfigError::ChapterCountMismatch {
                book,
                declared,
                listed,
            } => write!(
                f,
                "Book '{}' declares {} chapters but lists {}",
                book, declared, listed
            ),
            ConfigError::NonContiguousChapters {
                book,
                expected,
                found,
            } => write!(
                f,
                "Book '{}' has a non-contiguous chapter list: expected chapter {}, found {}",
                book, expected, found
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Which testament a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Testament {
    OT,
    NT,
}

/// Wire format of one chapter record in the catalog source.
#[derive(Debug, Deserialize)]
struct ChapterRecord {
    number: u32,
    verses: u32,
}

/// Wire format of one book record in the catalog source.
#[derive(Debug, Deserialize)]
struct BookRecord {
    abbrev: String,
    maxchapter: u32,
    testament: Testament,
    typeset: String,
    chapters: Vec<ChapterRecord>,
}

/// One canonical book. Immutable after the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    abbreviation: String,
    max_chapter: u32,
    testament: Testament,
    typeset_abbrev: String,
    /// Verse count per chapter, indexed by `chapter - 1`. Validated at load
    /// time to cover 1..=max_chapter contiguously.
    verse_counts: Vec<u32>,
}

impl BookEntry {
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn max_chapter(&self) -> u32 {
        self.max_chapter
    }

    pub fn testament(&self) -> Testament {
        self.testament
    }

    pub fn typeset_abbrev(&self) -> &str {
        &self.typeset_abbrev
    }

    pub fn max_verse(&self, chapter: u32) -> Option<u32> {
        if chapter == 0 {
            return None;
        }
        self.verse_counts.get(chapter as usize - 1).copied()
    }
}

/// The canonical book catalog. Declaration order in the source defines the
/// canonical book sort order used to validate ranges across books.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCatalog {
    entries: Vec<BookEntry>,
    abbreviations: Vec<String>,
    /// Uppercase abbreviation -> index into `entries`.
    index: HashMap<String, usize>,
}

impl BookCatalog {
    /// Build the catalog from the data file shipped with the crate.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_BOOKS)
    }

    /// Build the catalog from an external JSON file (alternate canons).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&source)
    }

    /// Build the catalog from JSON text. Validates that abbreviations are
    /// unique and that every book lists chapters 1..=maxchapter contiguously.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let records: Vec<BookRecord> =
            serde_json::from_str(source).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        if records.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut entries = Vec::with_capacity(records.len());
        let mut abbreviations = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for record in records {
            if record.chapters.len() as u32 != record.maxchapter {
                return Err(ConfigError::ChapterCountMismatch {
                    book: record.abbrev,
                    declared: record.maxchapter,
                    listed: record.chapters.len() as u32,
                });
            }

            let mut verse_counts = Vec::with_capacity(record.chapters.len());
            for (i, chapter) in record.chapters.iter().enumerate() {
                let expected = i as u32 + 1;
                if chapter.number != expected {
                    return Err(ConfigError::NonContiguousChapters {
                        book: record.abbrev,
                        expected,
                        found: chapter.number,
                    });
                }
                verse_counts.push(chapter.verses);
            }

            let key = record.abbrev.to_uppercase();
            if index.contains_key(&key) {
                return Err(ConfigError::DuplicateAbbreviation(record.abbrev));
            }
            index.insert(key, entries.len());

            abbreviations.push(record.abbrev.clone());
            entries.push(BookEntry {
                abbreviation: record.abbrev,
                max_chapter: record.maxchapter,
                testament: record.testament,
                typeset_abbrev: record.typeset,
                verse_counts,
            });
        }

        Ok(Self {
            entries,
            abbreviations,
            index,
        })
    }

    fn entry(&self, token: &str) -> Option<&BookEntry> {
        self.index
            .get(&token.to_uppercase())
            .map(|&i| &self.entries[i])
    }

    /// True iff the uppercased token matches a stored abbreviation.
    pub fn is_valid_abbreviation(&self, token: &str) -> bool {
        self.index.contains_key(&token.to_uppercase())
    }

    /// Zero-based position of the book in canonical order, or -1 if unknown.
    /// Only used for comparing two already-validated books.
    pub fn sort_value(&self, token: &str) -> i32 {
        match self.index.get(&token.to_uppercase()) {
            Some(&i) => i as i32,
            None => -1,
        }
    }

    /// Highest chapter number of the book, if the book is known.
    pub fn max_chapter(&self, token: &str) -> Option<u32> {
        self.entry(token).map(|b| b.max_chapter)
    }

    /// Highest verse of the given chapter, if book and chapter are known.
    pub fn max_verse(&self, token: &str, chapter: u32) -> Option<u32> {
        self.entry(token).and_then(|b| b.max_verse(chapter))
    }

    pub fn testament(&self, token: &str) -> Option<Testament> {
        self.entry(token).map(|b| b.testament)
    }

    pub fn typeset_abbrev(&self, token: &str) -> Option<&str> {
        self.entry(token).map(|b| b.typeset_abbrev.as_str())
    }

    /// True iff the token names a book with exactly one chapter.
    pub fn is_one_chapter_book(&self, token: &str) -> bool {
        let upper = token.to_uppercase();
        ONE_CHAPTER_BOOKS.contains(&upper.as_str())
    }

    /// True iff the given Psalm carries a liturgical heading. This performs
    /// no book check; the caller knows the book is Psalms.
    pub fn is_psalm_with_heading(&self, chapter: u32) -> bool {
        PSALMS_WITH_HEADING.contains(&chapter)
    }

    /// All canonical abbreviations, in catalog order.
    pub fn canonical_abbreviations(&self) -> &[String] {
        &self.abbreviations
    }

    /// `readable_form` applied over the canonical abbreviations, in order.
    pub fn readable_abbreviations(&self) -> Vec<String> {
        self.abbreviations
            .iter()
            .map(|a| readable_form(a))
            .collect()
    }

    pub fn entries(&self) -> &[BookEntry] {
        &self.entries
    }
}

/// Display form of an abbreviation: leading non-letters (digits) are kept
/// verbatim, the first letter is upper-cased, everything after it is
/// lower-cased. "2JOH" becomes "2Joh". Abbreviations without any letter are
/// returned unchanged.
pub fn readable_form(abbrev: &str) -> String {
    let first_alpha = match abbrev.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((i, _)) => i,
        None => return abbrev.to_string(),
    };

    let mut out = String::with_capacity(abbrev.len());
    out.push_str(&abbrev[..first_alpha]);

    let mut chars = abbrev[first_alpha..].chars();
    if let Some(c) = chars.next() {
        out.extend(c.to_uppercase());
    }
    for c in chars {
        out.extend(c.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BookCatalog {
        BookCatalog::bundled().expect("bundled catalog must load")
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = catalog();
        assert_eq!(catalog.canonical_abbreviations().len(), 66);
        assert_eq!(catalog.canonical_abbreviations()[0], "GEN");
    }

    #[test]
    fn abbreviation_lookup_is_case_insensitive() {
        let catalog = catalog();
        assert!(catalog.is_valid_abbreviation("GEN"));
        assert!(catalog.is_valid_abbreviation("gen"));
        assert!(catalog.is_valid_abbreviation("Gen"));
        assert!(catalog.is_valid_abbreviation("1kön"));
        assert!(!catalog.is_valid_abbreviation("xx"));
    }

    #[test]
    fn sort_values_follow_catalog_order() {
        let catalog = catalog();
        assert_eq!(catalog.sort_value("GEN"), 0);
        assert_eq!(catalog.sort_value("ex"), 1);
        assert!(catalog.sort_value("gen") < catalog.sort_value("ex"));
        assert_eq!(catalog.sort_value("nope"), -1);
    }

    #[test]
    fn chapter_and_verse_bounds() {
        let catalog = catalog();
        assert_eq!(catalog.max_chapter("gen"), Some(50));
        assert_eq!(catalog.max_chapter("OB"), Some(1));
        assert_eq!(catalog.max_chapter("xx"), None);
        assert_eq!(catalog.max_verse("gen", 1), Some(31));
        assert_eq!(catalog.max_verse("gen", 51), None);
        assert_eq!(catalog.max_verse("gen", 0), None);
        assert_eq!(catalog.max_verse("xx", 1), None);
    }

    #[test]
    fn testament_and_typeset_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.testament("gen"), Some(Testament::OT));
        assert_eq!(catalog.testament("mt"), Some(Testament::NT));
        assert_eq!(catalog.testament("xx"), None);
        assert_eq!(catalog.typeset_abbrev("2joh"), Some("2Joh"));
    }

    #[test]
    fn one_chapter_books_are_case_insensitive() {
        let catalog = catalog();
        for book in ["OB", "PHIM", "2JOH", "3JOH", "JUD", "ob", "jud", "2Joh"] {
            assert!(catalog.is_one_chapter_book(book), "{book}");
        }
        assert!(!catalog.is_one_chapter_book("GEN"));
    }

    #[test]
    fn psalms_with_heading_table() {
        let catalog = catalog();
        assert!(catalog.is_psalm_with_heading(3));
        assert!(!catalog.is_psalm_with_heading(1));
        assert!(!catalog.is_psalm_with_heading(2));
        assert!(catalog.is_psalm_with_heading(142));
    }

    #[test]
    fn readable_form_cases() {
        assert_eq!(readable_form("2JOH"), "2Joh");
        assert_eq!(readable_form("OB"), "Ob");
        assert_eq!(readable_form("GEN"), "Gen");
        assert_eq!(readable_form("1KÖN"), "1Kön");
        assert_eq!(readable_form("123"), "123");
        assert_eq!(readable_form(""), "");
    }

    #[test]
    fn duplicate_abbreviation_is_rejected() {
        let source = r#"[
            {"abbrev": "GEN", "maxchapter": 1, "testament": "OT", "typeset": "Gen",
             "chapters": [{"number": 1, "verses": 31}]},
            {"abbrev": "gen", "maxchapter": 1, "testament": "OT", "typeset": "Gen",
             "chapters": [{"number": 1, "verses": 31}]}
        ]"#;
        assert_eq!(
            BookCatalog::from_json(source),
            Err(ConfigError::DuplicateAbbreviation("gen".to_string()))
        );
    }

    #[test]
    fn non_contiguous_chapters_are_rejected() {
        let source = r#"[
            {"abbrev": "GEN", "maxchapter": 2, "testament": "OT", "typeset": "Gen",
             "chapters": [{"number": 1, "verses": 31}, {"number": 3, "verses": 25}]}
        ]"#;
        assert_eq!(
            BookCatalog::from_json(source),
            Err(ConfigError::NonContiguousChapters {
                book: "GEN".to_string(),
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn chapter_count_mismatch_is_rejected() {
        let source = r#"[
            {"abbrev": "GEN", "maxchapter": 3, "testament": "OT", "typeset": "Gen",
             "chapters": [{"number": 1, "verses": 31}]}
        ]"#;
        assert!(matches!(
            BookCatalog::from_json(source),
            Err(ConfigError::ChapterCountMismatch { .. })
        ));
    }

    #[test]
    fn missing_field_is_malformed() {
        let source = r#"[{"abbrev": "GEN", "maxchapter": 1}]"#;
        assert!(matches!(
            BookCatalog::from_json(source),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(BookCatalog::from_json("[]"), Err(ConfigError::EmptyCatalog));
    }
}
