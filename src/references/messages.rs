//! Diagnostic message templates
//!
//! Message text is data, not control flow: the validation pipeline picks a
//! template and the parameters, [`render`] substitutes them. Translating the
//! diagnostics to another language is a template swap, not a code change.

/// The input matched none of the grammar patterns.
pub const INVALID_PATTERN: &str = "Invalid pattern in reference.";

/// A book token is not a known abbreviation.
pub const INVALID_ABBREVIATION: &str = "Invalid abbreviation \"{book}\".";

/// FBFCTC: the to-chapter does not come after the from-chapter.
pub const CHAPTER_ORDER: &str = "To-chapter must be greater than from-chapter.";

/// FBFCFVTCTV: the to position does not come after the from position.
pub const CHAPTER_VERSE_ORDER: &str =
    "To chapter and verse must be greater than from chapter and verse.";

/// FBFCFVTV: the to-verse does not come after the from-verse.
pub const VERSE_ORDER: &str = "To-verse must be greater than from-verse.";

/// FBTB: the books are not in canonical order.
pub const BOOK_ORDER: &str = "The books are in the wrong order.";

/// The from-chapter exceeds the book's chapter count.
pub const CHAPTER_BOUND: &str = "{book} has only {max} chapters";

/// The from-verse exceeds the chapter's verse count.
pub const VERSE_BOUND: &str = "{book}{chapter} has only {max} verses";

/// Substitute named `{placeholder}` parameters into a template.
pub fn render(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_named_params() {
        assert_eq!(
            render(CHAPTER_BOUND, &[("book", "gen"), ("max", "50")]),
            "gen has only 50 chapters"
        );
        assert_eq!(
            render(VERSE_BOUND, &[("book", "gen"), ("chapter", "1"), ("max", "31")]),
            "gen1 has only 31 verses"
        );
    }

    #[test]
    fn render_without_params_is_identity() {
        assert_eq!(render(INVALID_PATTERN, &[]), INVALID_PATTERN);
    }
}
