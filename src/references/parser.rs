//! Reference parser
//!
//! Splits a shorthand reference into its components, corrects references to
//! one-chapter books, and checks the result against the book catalog. The
//! pipeline is: normalize separators, match the grammar table, apply the
//! one-chapter correction, validate books (early exit on unknown books),
//! validate ordering, validate bounds.

use crate::books::BookCatalog;
use crate::references::grammar::{self, GrammarType};
use crate::references::messages;

/// The structured outcome of one parse call. Created fresh per call, never
/// shared or persisted.
///
/// Numeric fields use `0` as "not present in this grammar type";
/// `grammar_type` is `None` when no pattern matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// The input with `,`/`:` replaced by `.`, rewritten again if the
    /// one-chapter-book correction applied.
    pub normalized: String,
    pub grammar_type: Option<GrammarType>,
    /// Book tokens with the case as typed; `to_book` empty if absent.
    pub from_book: String,
    pub to_book: String,
    pub from_chapter: u32,
    pub to_chapter: u32,
    pub from_verse: u32,
    pub to_verse: u32,
    /// True only if a pattern matched and every validation stage succeeded.
    pub passed: bool,
    /// Diagnostics in the order generated; empty when `passed`.
    pub messages: Vec<String>,
}

impl ParsedReference {
    fn new(normalized: String) -> Self {
        Self {
            normalized,
            grammar_type: None,
            from_book: String::new(),
            to_book: String::new(),
            from_chapter: 0,
            to_chapter: 0,
            from_verse: 0,
            to_verse: 0,
            passed: true,
            messages: Vec::new(),
        }
    }

    fn fail(&mut self, message: String) {
        self.passed = false;
        self.messages.push(message);
    }
}

/// Parses shorthand references against a read-only book catalog.
///
/// `parse` is a pure function of its input and the catalog; the parser can be
/// shared freely across threads.
pub struct ReferenceParser<'c> {
    catalog: &'c BookCatalog,
}

impl<'c> ReferenceParser<'c> {
    pub fn new(catalog: &'c BookCatalog) -> Self {
        Self { catalog }
    }

    /// Parse and validate one reference. Never fails with `Err` or a panic;
    /// unparseable or invalid input is reported through `passed = false` and
    /// the accumulated diagnostics.
    pub fn parse(&self, reference: &str) -> ParsedReference {
        let normalized: String = reference
            .chars()
            .map(|c| if c == ',' || c == ':' { '.' } else { c })
            .collect();
        let mut parsed = ParsedReference::new(normalized);

        let (tag, matched) = match grammar::match_reference(&parsed.normalized) {
            Some(hit) => hit,
            None => {
                parsed.fail(messages::render(messages::INVALID_PATTERN, &[]));
                return parsed;
            }
        };

        parsed.grammar_type = Some(tag);
        parsed.from_book = matched.from_book;
        parsed.to_book = matched.to_book;
        parsed.from_chapter = matched.from_chapter;
        parsed.to_chapter = matched.to_chapter;
        parsed.from_verse = matched.from_verse;
        parsed.to_verse = matched.to_verse;

        self.correct_one_chapter_book(&mut parsed);
        self.validate(&mut parsed);
        parsed
    }

    /// One-chapter books are typed without the (always-1) chapter: in "jud3"
    /// the 3 looks like a chapter but is really a verse. Reinterpret the
    /// matched numbers, insert chapter 1 and rewrite the normalized text.
    fn correct_one_chapter_book(&self, parsed: &mut ParsedReference) {
        let applies = matches!(
            parsed.grammar_type,
            Some(GrammarType::FBFC) | Some(GrammarType::FBFCTC)
        ) && self.catalog.is_one_chapter_book(&parsed.from_book);
        if !applies {
            return;
        }

        parsed.from_verse = parsed.from_chapter;
        if parsed.grammar_type == Some(GrammarType::FBFCTC) {
            parsed.to_verse = parsed.to_chapter;
            parsed.to_chapter = 0;
            parsed.grammar_type = Some(GrammarType::FBFCFVTV);
            parsed.normalized = format!(
                "{}1.{}-{}",
                parsed.from_book, parsed.from_verse, parsed.to_verse
            );
        } else {
            parsed.grammar_type = Some(GrammarType::FBFCFV);
            parsed.normalized = format!("{}1.{}", parsed.from_book, parsed.from_verse);
        }
        parsed.from_chapter = 1;
    }

    fn validate(&self, parsed: &mut ParsedReference) {
        // Stage 1/2: both book tokens must be known abbreviations. If either
        // is not, no range check on the unverified tokens makes sense.
        if !self.catalog.is_valid_abbreviation(&parsed.from_book) {
            parsed.fail(messages::render(
                messages::INVALID_ABBREVIATION,
                &[("book", &parsed.from_book)],
            ));
        }
        if !parsed.to_book.is_empty() && !self.catalog.is_valid_abbreviation(&parsed.to_book) {
            parsed.fail(messages::render(
                messages::INVALID_ABBREVIATION,
                &[("book", &parsed.to_book)],
            ));
        }
        if !parsed.passed {
            return;
        }

        // Stage 4: type-specific ordering of the to-part against the
        // from-part. Failures accumulate; the pipeline keeps going.
        match parsed.grammar_type {
            Some(GrammarType::FBFCTC) => {
                if parsed.to_chapter <= parsed.from_chapter {
                    parsed.fail(messages::render(messages::CHAPTER_ORDER, &[]));
                }
            }
            Some(GrammarType::FBFCFVTCTV) => {
                let forward = parsed.to_chapter > parsed.from_chapter
                    || (parsed.to_chapter == parsed.from_chapter
                        && parsed.to_verse > parsed.from_verse);
                if !forward {
                    parsed.fail(messages::render(messages::CHAPTER_VERSE_ORDER, &[]));
                }
            }
            Some(GrammarType::FBFCFVTV) => {
                if parsed.to_verse <= parsed.from_verse {
                    parsed.fail(messages::render(messages::VERSE_ORDER, &[]));
                }
            }
            _ => {}
        }

        // Stage 5: a book span must run forward in canonical order. Both
        // abbreviations are already known to be valid.
        if parsed.grammar_type == Some(GrammarType::FBTB)
            && self.catalog.sort_value(&parsed.to_book) <= self.catalog.sort_value(&parsed.from_book)
        {
            parsed.fail(messages::render(messages::BOOK_ORDER, &[]));
        }

        // Stage 6: from-chapter within the book. Checking the from side is
        // sufficient; a form like "gen1-ex7" is not in the grammar.
        if parsed.from_chapter != 0 {
            if let Some(max) = self.catalog.max_chapter(&parsed.from_book) {
                if parsed.from_chapter > max {
                    parsed.fail(messages::render(
                        messages::CHAPTER_BOUND,
                        &[("book", &parsed.from_book), ("max", &max.to_string())],
                    ));
                }
            }
        }

        // Stage 7: from-verse within the chapter. Skipped when the chapter
        // itself was out of range (no verse count exists to compare against).
        if parsed.from_verse != 0 {
            if let Some(max) = self
                .catalog
                .max_verse(&parsed.from_book, parsed.from_chapter)
            {
                if parsed.from_verse > max {
                    parsed.fail(messages::render(
                        messages::VERSE_BOUND,
                        &[
                            ("book", &parsed.from_book),
                            ("chapter", &parsed.from_chapter.to_string()),
                            ("max", &max.to_string()),
                        ],
                    ));
                }
            }
        }
    }
}
