//! Text-level cleanup passes applied to the serialized body.

use regex::Regex;
use std::sync::LazyLock;

/// Paragraph holding nothing but ASCII whitespace and line breaks, or a
/// self-closing paragraph. A non-breaking space is content.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EMPTY_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(?:[\t\n\f\r ]|<br/>)*</p>|<p/>").expect("valid regex"));

/// Spaces between a closing and an opening paragraph tag.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACES_BETWEEN_PARAGRAPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</p> +<p>").expect("valid regex"));

/// Line breaks between a closing and an opening paragraph tag.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NEWLINES_BETWEEN_PARAGRAPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</p>(?:\r?\n)+<p>").expect("valid regex"));

/// ASCII whitespace-only lines, and a whitespace run ending the text after a
/// line break.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EMPTY_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[\t\n\f\r ]*$[\r\n]*|[\r\n]+[\t\n\f\r ]+\z").expect("valid regex")
});

/// Apply the paragraph rules to serialized markup.
///
/// - Empty paragraphs (whitespace and `<br/>` only) are removed
/// - `</p>   <p>` becomes `</p><p>`
/// - `</p>` followed by line breaks and `<p>` keeps a single line break
///
/// # Examples
/// ```
/// use body_transformer::text::clean_paragraphs;
///
/// assert_eq!(clean_paragraphs("<p>a</p>  <p><br/></p><p>b</p>"), "<p>a</p><p>b</p>");
/// ```
pub fn clean_paragraphs(input: &str) -> String {
    let result = EMPTY_PARAGRAPH.replace_all(input, "");
    let result = SPACES_BETWEEN_PARAGRAPHS.replace_all(&result, "</p><p>");
    NEWLINES_BETWEEN_PARAGRAPHS
        .replace_all(&result, "</p>\n<p>")
        .into_owned()
}

/// Unescape all HTML character references.
///
/// Escaping for the final medium is left to the consumer of the body, so the
/// transformer hands back plain characters.
pub fn unescape_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}

/// Remove whitespace-only lines.
///
/// A single trailing line break is kept; a trailing line break followed by
/// more whitespace is removed together with that whitespace.
pub fn remove_empty_lines(input: &str) -> String {
    EMPTY_LINES.replace_all(input, "").into_owned()
}
