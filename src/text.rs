//! Cue text normalization policies.
//!
//! Each source format gets its own policy: WebVTT cue bodies carry inline
//! markup to strip but their line layout is meaningful, while XML-extracted
//! text carries pretty-printing whitespace to collapse.

use std::sync::LazyLock;

use regex::Regex;

/// Remove angle-bracket markup (`<c>`, `<v Speaker>`, `<b>`, ...) from a
/// WebVTT cue body. The body is trimmed first; line breaks inside it are
/// preserved.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
    TAG.replace_all(text.trim(), "").into_owned()
}

/// Whitespace policy for XML-extracted text: trim, tighten whitespace runs
/// touching a newline down to the newline alone, then collapse every
/// remaining run of horizontal whitespace into a single space.
///
/// Newlines themselves survive, so `<br>`-derived line breaks stay intact.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    static BEFORE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\n").unwrap());
    static AFTER_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s+").unwrap());
    static HORIZONTAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]+").unwrap());

    let text = text.trim();
    let text = BEFORE_NEWLINE.replace_all(text, "\n");
    let text = AFTER_NEWLINE.replace_all(&text, "\n");
    HORIZONTAL.replace_all(&text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_inline_tags() {
        assert_eq!(strip_markup("Hello, <b>bold</b> world!"), "Hello, bold world!");
        assert_eq!(strip_markup("<v Fred>Hi there"), "Hi there");
        assert_eq!(strip_markup("<c.yellow>colored</c> text"), "colored text");
    }

    #[test]
    fn strip_markup_keeps_line_breaks() {
        assert_eq!(strip_markup("Line 1\n<i>Line 2</i>\nLine 3"), "Line 1\nLine 2\nLine 3");
    }

    #[test]
    fn strip_markup_trims_the_body() {
        assert_eq!(strip_markup("  Hello  "), "Hello");
        assert_eq!(strip_markup("<b></b>"), "");
    }

    #[test]
    fn collapses_horizontal_runs() {
        assert_eq!(collapse_whitespace("  Hello \t  world  "), "Hello world");
    }

    #[test]
    fn collapse_keeps_newlines() {
        assert_eq!(collapse_whitespace("Line one   \n   Line two"), "Line one\nLine two");
        assert_eq!(collapse_whitespace("a\n\nb"), "a\nb");
    }

    #[test]
    fn collapse_of_blank_text_is_empty() {
        assert_eq!(collapse_whitespace("   \n \t "), "");
    }
}
