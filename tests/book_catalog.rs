//! Integration tests for the bundled book catalog.

use bibleref::{readable_form, BookCatalog, Testament};

#[test]
fn valid_abbreviation_agrees_with_canonical_membership() {
    let catalog = BookCatalog::bundled().unwrap();
    for abbrev in catalog.canonical_abbreviations() {
        assert!(catalog.is_valid_abbreviation(abbrev), "{abbrev}");
        assert!(catalog.is_valid_abbreviation(&abbrev.to_lowercase()), "{abbrev}");
        assert!(
            catalog.is_valid_abbreviation(&readable_form(abbrev)),
            "{abbrev}"
        );
    }
    assert!(!catalog.is_valid_abbreviation("notabook"));
}

#[test]
fn sort_values_enumerate_canonical_order() {
    let catalog = BookCatalog::bundled().unwrap();
    for (i, abbrev) in catalog.canonical_abbreviations().iter().enumerate() {
        assert_eq!(catalog.sort_value(abbrev), i as i32);
    }
}

#[test]
fn every_chapter_has_a_verse_count() {
    let catalog = BookCatalog::bundled().unwrap();
    for entry in catalog.entries() {
        assert!(entry.max_chapter() >= 1);
        for chapter in 1..=entry.max_chapter() {
            let max = catalog.max_verse(entry.abbreviation(), chapter);
            assert!(
                matches!(max, Some(v) if v >= 1),
                "{} {}",
                entry.abbreviation(),
                chapter
            );
        }
        assert_eq!(
            catalog.max_verse(entry.abbreviation(), entry.max_chapter() + 1),
            None
        );
    }
}

#[test]
fn one_chapter_books_have_exactly_one_chapter() {
    let catalog = BookCatalog::bundled().unwrap();
    for abbrev in ["OB", "PHIM", "2JOH", "3JOH", "JUD"] {
        assert!(catalog.is_one_chapter_book(abbrev));
        assert_eq!(catalog.max_chapter(abbrev), Some(1), "{abbrev}");
    }
}

#[test]
fn testaments_split_at_malachi() {
    let catalog = BookCatalog::bundled().unwrap();
    assert_eq!(catalog.testament("MAL"), Some(Testament::OT));
    assert_eq!(catalog.testament("MT"), Some(Testament::NT));
    assert!(catalog.sort_value("MAL") < catalog.sort_value("MT"));
}

#[test]
fn typeset_forms_match_readable_forms() {
    // The bundled catalog's typeset abbreviations follow the readable form.
    let catalog = BookCatalog::bundled().unwrap();
    for abbrev in catalog.canonical_abbreviations() {
        assert_eq!(
            catalog.typeset_abbrev(abbrev),
            Some(readable_form(abbrev).as_str()),
            "{abbrev}"
        );
    }
}
