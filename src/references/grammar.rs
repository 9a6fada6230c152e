//! Reference grammar table
//!
//! The seven surface patterns a reference can take, as declarative regex
//! rules. Order matters: patterns are tried in declaration order, most
//! specific first, and the first match wins. Shorter patterns are syntactic
//! prefixes of longer ones ("gen1" is a prefix of "gen1.1"), so the
//! specificity order is itself the disambiguation rule — do not merge these
//! into a single longest-match automaton.
//!
//! A book token is an optional leading digit followed by letters. The letter
//! class includes `ö`/`Ö` for localized abbreviations ("Kön", "Röm").

use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar type tags. The letters spell out the captured fields:
/// F=from, T=to, B=book, C=chapter, V=verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum GrammarType {
    /// `gen` — a whole book
    FB,
    /// `gen-ex` — a span of books
    FBTB,
    /// `gen1` — one chapter
    FBFC,
    /// `gen1-2` — a span of chapters
    FBFCTC,
    /// `gen1.1` — one verse
    FBFCFV,
    /// `gen1.1-6` — a span of verses within a chapter
    FBFCFVTV,
    /// `gen1.1-2.6` — a span across chapters
    FBFCFVTCTV,
}

impl GrammarType {
    /// The tag as it appears in diagnostics and serialized output.
    pub fn code(&self) -> &'static str {
        match self {
            GrammarType::FB => "FB",
            GrammarType::FBTB => "FBTB",
            GrammarType::FBFC => "FBFC",
            GrammarType::FBFCTC => "FBFCTC",
            GrammarType::FBFCFV => "FBFCFV",
            GrammarType::FBFCFVTV => "FBFCFVTV",
            GrammarType::FBFCFVTCTV => "FBFCFVTCTV",
        }
    }
}

impl std::fmt::Display for GrammarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The fields a pattern captures, in capture-group order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FromBook,
    ToBook,
    FromChapter,
    ToChapter,
    FromVerse,
    ToVerse,
}

/// Grammar rules as data: (pattern, tag, capture fields in group order).
/// Tried strictly in declaration order; first match wins.
const GRAMMAR_PATTERNS: &[(&str, GrammarType, &[Field])] = &[
    // gen1.1-2.6
    (
        r"^(\d?[a-zöA-ZÖ]+)(\d+)\.(\d+)-(\d+)\.(\d+)$",
        GrammarType::FBFCFVTCTV,
        &[
            Field::FromBook,
            Field::FromChapter,
            Field::FromVerse,
            Field::ToChapter,
            Field::ToVerse,
        ],
    ),
    // gen1.1-6
    (
        r"^(\d?[a-zöA-ZÖ]+)(\d+)\.(\d+)-(\d+)$",
        GrammarType::FBFCFVTV,
        &[
            Field::FromBook,
            Field::FromChapter,
            Field::FromVerse,
            Field::ToVerse,
        ],
    ),
    // gen1.1
    (
        r"^(\d?[a-zöA-ZÖ]+)(\d+)\.(\d+)$",
        GrammarType::FBFCFV,
        &[Field::FromBook, Field::FromChapter, Field::FromVerse],
    ),
    // gen1-2
    (
        r"^(\d?[a-zöA-ZÖ]+)(\d+)-(\d+)$",
        GrammarType::FBFCTC,
        &[Field::FromBook, Field::FromChapter, Field::ToChapter],
    ),
    // gen1
    (
        r"^(\d?[a-zöA-ZÖ]+)(\d+)$",
        GrammarType::FBFC,
        &[Field::FromBook, Field::FromChapter],
    ),
    // gen-ex
    (
        r"^(\d?[a-zöA-ZÖ]+)-(\d?[a-zöA-ZÖ]+)$",
        GrammarType::FBTB,
        &[Field::FromBook, Field::ToBook],
    ),
    // gen
    (
        r"^(\d?[a-zöA-ZÖ]+)$",
        GrammarType::FB,
        &[Field::FromBook],
    ),
];

/// Lazily compiled grammar table, in declaration order.
static COMPILED_PATTERNS: Lazy<Vec<(Regex, GrammarType, &'static [Field])>> = Lazy::new(|| {
    GRAMMAR_PATTERNS
        .iter()
        .map(|(pattern, tag, fields)| {
            (
                Regex::new(pattern).expect("grammar pattern must compile"),
                *tag,
                *fields,
            )
        })
        .collect()
});

/// Raw capture result of a grammar match, before correction and validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GrammarMatch {
    pub from_book: String,
    pub to_book: String,
    pub from_chapter: u32,
    pub to_chapter: u32,
    pub from_verse: u32,
    pub to_verse: u32,
}

/// Match the normalized text against the grammar table. Returns the tag of
/// the first matching pattern and its captured fields, or `None` if no
/// pattern matches.
pub fn match_reference(normalized: &str) -> Option<(GrammarType, GrammarMatch)> {
    for (regex, tag, fields) in COMPILED_PATTERNS.iter() {
        if let Some(captures) = regex.captures(normalized) {
            let mut matched = GrammarMatch::default();
            for (i, field) in fields.iter().enumerate() {
                let group = match captures.get(i + 1) {
                    Some(g) => g.as_str(),
                    None => continue,
                };
                match field {
                    Field::FromBook => matched.from_book = group.to_string(),
                    Field::ToBook => matched.to_book = group.to_string(),
                    // Absurdly long digit runs saturate; the bound checks
                    // then fail them like any other out-of-range number.
                    Field::FromChapter => {
                        matched.from_chapter = group.parse().unwrap_or(u32::MAX)
                    }
                    Field::ToChapter => matched.to_chapter = group.parse().unwrap_or(u32::MAX),
                    Field::FromVerse => matched.from_verse = group.parse().unwrap_or(u32::MAX),
                    Field::ToVerse => matched.to_verse = group.parse().unwrap_or(u32::MAX),
                }
            }
            return Some((*tag, matched));
        }
    }
    None
}
