//! Property-based tests for the reference parser.
//!
//! Two properties: parse never panics, whatever the input; and for any
//! in-bounds generated reference, parsing succeeds and the normalized text is
//! a fixed point of the pipeline.

use once_cell::sync::Lazy;
use proptest::prelude::*;

use bibleref::{BookCatalog, ParsedReference, ReferenceParser};

static CATALOG: Lazy<BookCatalog> =
    Lazy::new(|| BookCatalog::bundled().expect("bundled catalog must load"));

fn parse(reference: &str) -> ParsedReference {
    ReferenceParser::new(&CATALOG).parse(reference)
}

/// A verse position that exists in the bundled catalog, rendered as
/// `<book><chapter>.<verse>` with the book in lowercase.
fn in_bounds_verse_reference() -> impl Strategy<Value = String> {
    let book_count = CATALOG.canonical_abbreviations().len();
    (0..book_count)
        .prop_flat_map(|book_idx| {
            let abbrev = CATALOG.canonical_abbreviations()[book_idx].to_lowercase();
            let max_chapter = CATALOG.max_chapter(&abbrev).unwrap();
            (Just(abbrev), 1..=max_chapter)
        })
        .prop_flat_map(|(abbrev, chapter)| {
            let max_verse = CATALOG.max_verse(&abbrev, chapter).unwrap();
            (Just(abbrev), Just(chapter), 1..=max_verse)
        })
        .prop_map(|(abbrev, chapter, verse)| format!("{}{}.{}", abbrev, chapter, verse))
}

proptest! {
    #[test]
    fn parse_never_panics(input in "\\PC{0,30}") {
        let _ = parse(&input);
    }

    #[test]
    fn parse_never_panics_on_reference_shaped_input(
        book in "[0-9]?[a-zöA-ZÖ]{1,6}",
        chapter in 0u64..100_000_000_000,
        verse in 0u64..100_000_000_000,
    ) {
        let _ = parse(&format!("{}{}.{}", book, chapter, verse));
        let _ = parse(&format!("{}{}-{}", book, chapter, verse));
    }

    #[test]
    fn in_bounds_references_pass(reference in in_bounds_verse_reference()) {
        let parsed = parse(&reference);
        prop_assert!(parsed.passed, "{}: {:?}", reference, parsed.messages);
        prop_assert!(parsed.messages.is_empty());
    }

    #[test]
    fn normalized_text_is_a_fixed_point(reference in in_bounds_verse_reference()) {
        let first = parse(&reference);
        prop_assume!(first.passed);
        let second = parse(&first.normalized);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn failed_parses_always_carry_a_diagnostic(input in "\\PC{0,30}") {
        let parsed = parse(&input);
        if parsed.passed {
            prop_assert!(parsed.messages.is_empty());
        } else {
            prop_assert!(!parsed.messages.is_empty());
        }
    }
}
