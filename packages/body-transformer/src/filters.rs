//! Text filter chain for turning a body into plain text.
//!
//! A filter is a total function from string to string. Filters carry no
//! state and are applied strictly in list order.
//!
//! # Example
//!
//! ```
//! use body_transformer::filters::{apply, default_content_filters};
//!
//! let body = "<body><p>First <em>point</em>.</p><table><tr><td>1</td></tr></table>\n<p>Second.</p></body>";
//! assert_eq!(apply(body, &default_content_filters()), "First point . Second.");
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// A text filter.
pub type Filter = fn(&str) -> String;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s)+").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PULL_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pull-quote.*?</pull-quote>").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WEB_PULL_QUOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<web-pull-quote.*?</web-pull-quote>").expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<table.*?</table>").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PROMO_BOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<promo-box.*?</promo-box>").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WEB_INLINE_PICTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<web-inline-picture.*?</web-inline-picture>").expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NBSP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&nbsp;").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GENERIC_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Apply filters to a text, in order.
pub fn apply(text: &str, filters: &[Filter]) -> String {
    filters
        .iter()
        .fold(text.to_string(), |current, filter| filter(&current))
}

/// The filter list used to derive plain text from a content body.
#[must_use]
pub fn default_content_filters() -> Vec<Filter> {
    vec![
        remove_pull_quote_tag,
        remove_web_pull_quote_tag,
        remove_table_tag,
        remove_promo_box_tag,
        remove_web_inline_picture_tag,
        remove_html_entity,
        remove_generic_tags,
        trim_space,
        dedup_spaces,
    ]
}

/// Replace every match of `pattern` in `src` with `repl`.
pub fn replace_matched_text(pattern: &Regex, src: &str, repl: &str) -> String {
    pattern.replace_all(src, repl).into_owned()
}

/// Replace every match of `pattern` with a space, then collapse and trim
/// whitespace.
///
/// Unlike [`delete_matched_text`] this never merges neighbouring words.
pub fn remove_matched_text(pattern: &Regex, src: &str) -> String {
    let result = replace_matched_text(pattern, src, " ");
    dedup_spaces(&result).trim().to_string()
}

/// Delete every match of `pattern`. Neighbouring words may merge.
pub fn delete_matched_text(pattern: &Regex, src: &str) -> String {
    replace_matched_text(pattern, src, "")
}

/// Collapse each whitespace run to its last character.
pub fn dedup_spaces(src: &str) -> String {
    replace_matched_text(&WHITESPACE_RUN, src, "$1")
}

pub fn remove_pull_quote_tag(input: &str) -> String {
    delete_matched_text(&PULL_QUOTE, input)
}

pub fn remove_web_pull_quote_tag(input: &str) -> String {
    delete_matched_text(&WEB_PULL_QUOTE, input)
}

pub fn remove_table_tag(input: &str) -> String {
    delete_matched_text(&TABLE, input)
}

pub fn remove_promo_box_tag(input: &str) -> String {
    delete_matched_text(&PROMO_BOX, input)
}

pub fn remove_web_inline_picture_tag(input: &str) -> String {
    delete_matched_text(&WEB_INLINE_PICTURE, input)
}

/// Turn `&nbsp;` into a space and unescape the remaining entities.
pub fn remove_html_entity(input: &str) -> String {
    let text = remove_matched_text(&NBSP, input);
    html_escape::decode_html_entities(&text).into_owned()
}

/// Replace every tag with a space.
pub fn remove_generic_tags(input: &str) -> String {
    remove_matched_text(&GENERIC_TAG, input)
}

pub fn trim_space(input: &str) -> String {
    input.trim().to_string()
}
