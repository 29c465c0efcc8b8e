//! Configuration constants and URL synthesis for the body transformer.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Base URL of the public content API.
pub const API_BASE_URL: &str = "http://api.ft.com";

/// Content type of a regular article.
pub const ARTICLE_TYPE: &str = "http://www.ft.com/ontology/content/Article";

/// Content type of an image set.
pub const IMAGE_SET_TYPE: &str = "http://www.ft.com/ontology/content/ImageSet";

/// Content type of a media resource.
pub const MEDIA_RESOURCE_TYPE: &str = "http://www.ft.com/ontology/content/MediaResource";

/// Content type of a public company concept.
pub const PUBLIC_COMPANY_TYPE: &str = "http://www.ft.com/ontology/company/PublicCompany";

/// Attribute holding the identifier of embedded content.
pub const ID_ATTR: &str = "id";

/// Attribute holding the content type of embedded content.
pub const TYPE_ATTR: &str = "type";

/// Attribute holding the synthesized API URL.
pub const URL_ATTR: &str = "url";

/// Presentational attribute stripped from promoted scrollable children.
pub const THEME_STYLE_ATTR: &str = "theme-style";

/// Wrapper element flattened into the surrounding flow.
pub const SCROLLABLE_BLOCK_TAG: &str = "scrollable-block";

/// Element whose children are promoted out of a scrollable block.
pub const SCROLLABLE_TEXT_TAG: &str = "scrollable-text";

/// Mapping from content type URI to API path segment.
static TYPE_PATH_SEGMENTS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (ARTICLE_TYPE, "content"),
        (IMAGE_SET_TYPE, "content"),
        (MEDIA_RESOURCE_TYPE, "content"),
        ("http://www.ft.com/ontology/content/Video", "content"),
        (PUBLIC_COMPANY_TYPE, "organisations"),
        ("http://www.ft.com/ontology/content/ContentPackage", "content"),
        ("http://www.ft.com/ontology/content/Content", "content"),
        ("http://www.ft.com/ontology/content/Image", "content"),
        ("http://www.ft.com/ontology/content/DynamicContent", "content"),
        ("http://www.ft.com/ontology/content/Graphic", "content"),
        ("http://www.ft.com/ontology/content/Audio", "content"),
    ])
});

/// Look up the API path segment for a content type.
///
/// Unknown types map to the empty segment.
///
/// # Examples
/// ```
/// use body_transformer::config::path_segment;
///
/// assert_eq!(path_segment("http://www.ft.com/ontology/content/Article"), "content");
/// assert_eq!(path_segment("http://unknown/Type"), "");
/// ```
#[must_use]
pub fn path_segment(content_type: &str) -> &'static str {
    TYPE_PATH_SEGMENTS
        .get(content_type)
        .copied()
        .unwrap_or_default()
}

/// Build the API URL for a piece of embedded content.
///
/// An unknown content type produces an empty path segment
/// (`http://api.ft.com//{id}`). Downstream consumers rely on the attribute
/// being present, so the URL is kept as is.
///
/// # Arguments
/// * `content_type` - Value of the `type` attribute
/// * `id` - Value of the `id` attribute
///
/// # Examples
/// ```
/// use body_transformer::config::api_url;
///
/// assert_eq!(
///     api_url("http://www.ft.com/ontology/company/PublicCompany", "abc"),
///     "http://api.ft.com/organisations/abc"
/// );
/// ```
#[must_use]
pub fn api_url(content_type: &str, id: &str) -> String {
    format!("{API_BASE_URL}/{}/{id}", path_segment(content_type))
}
