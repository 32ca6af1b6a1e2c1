//! Content-shaped rules that do not depend on a vocabulary.
//!
//! Every rule here must stay free of capturing groups: the composite pattern
//! wraps each rule in exactly one named group and dispatches on that name.

use super::category::Category;

/// Triple-quoted block. Closed forms come first so the shortest closed span
/// is preferred; the open forms run to end of text.
pub const DOCSTRING_PATTERN: &str = concat!(
    r#""""(?s:.*?)""""#, // closed double quote docstring
    "|",
    r"'''(?s:.*?)'''", // closed single quote docstring
    "|",
    r#""""(?s:.*)"#, // open double quote docstring
    "|",
    r"'''(?s:.*)", // open single quote docstring
);

/// Single-line string. An open string ends before the line terminator.
pub const STRING_PATTERN: &str = concat!(
    r#""[^\r\n]*?"|"[^\r\n]*"#,
    "|",
    r"'[^\r\n]*?'|'[^\r\n]*",
);

/// `#` to end of line, line terminator excluded.
pub const COMMENT_PATTERN: &str = r"#[^\r\n]*";

/// Numeric literal, optionally with a fraction and an exponent.
///
/// A literal only starts at the beginning of the text or right after a
/// non-word character. For digit-led literals that is `\b`; for dot-led
/// literals (`.45`) it is `\B`, since `.` is itself a non-word character.
pub const NUMBER_PATTERN: &str = concat!(
    r"\b(?:",
    r"[0-9]+\.?[0-9]*[eE][-+]?[0-9]*", // scientific notation
    "|",
    r"[0-9]+\.?[0-9]*", // digits with an optional fraction
    ")",
    "|",
    r"\B\.[0-9]+", // fraction only
);

/// Static rule for a content-shaped category, `None` for vocabulary-derived ones.
pub fn static_pattern(category: Category) -> Option<&'static str> {
    match category {
        Category::Docstring => Some(DOCSTRING_PATTERN),
        Category::String => Some(STRING_PATTERN),
        Category::Number => Some(NUMBER_PATTERN),
        Category::Comment => Some(COMMENT_PATTERN),
        Category::Keyword | Category::Exception | Category::FunctionName => None,
    }
}
