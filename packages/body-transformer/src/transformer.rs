//! Main transformer service that ties all components together.

use std::sync::LazyLock;

use crate::error::Result;
use crate::registry::{create_body_registry, ElementRegistry, TransformEngine};
use crate::text::{clean_paragraphs, remove_empty_lines, unescape_entities};
use crate::xml::{parse_document, write_document};

/// Process-wide transformer with the production rule set.
static DEFAULT_TRANSFORMER: LazyLock<BodyTransformer> =
    LazyLock::new(|| BodyTransformer::new(create_body_registry()));

/// Transforms content bodies with a fixed set of rules.
///
/// A transformer holds no per-call state; each call parses its own tree.
pub struct BodyTransformer {
    engine: TransformEngine,
}

impl BodyTransformer {
    /// Create a transformer applying the rules of `registry`.
    #[must_use]
    pub fn new(registry: ElementRegistry) -> Self {
        Self {
            engine: TransformEngine::new(registry),
        }
    }

    /// Get a reference to the underlying engine.
    #[must_use]
    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    /// Transform a body.
    ///
    /// The body is parsed, the tree rules are applied, and the serialized
    /// result goes through the paragraph cleanup, entity unescaping and empty
    /// line removal passes.
    ///
    /// # Errors
    /// Returns `XmlParse` if the body is not well-formed, or `Serialize` if
    /// the transformed tree cannot be written. No partial output is returned.
    pub fn transform(&self, body: &str) -> Result<String> {
        let mut doc = parse_document(body)?;

        self.engine.apply(&mut doc);

        let serialized = write_document(&doc)?;
        let cleaned = clean_paragraphs(&serialized);
        let unescaped = unescape_entities(&cleaned);
        Ok(remove_empty_lines(&unescaped))
    }
}

impl Default for BodyTransformer {
    fn default() -> Self {
        Self::new(create_body_registry())
    }
}

/// Transform a content body into a form presentable for external consumers.
///
/// # Arguments
/// * `body` - The body XML
///
/// # Returns
/// The rewritten, pruned and cleaned body
///
/// # Errors
/// Returns `XmlParse` if the body is not well-formed.
///
/// # Examples
/// ```
/// use body_transformer::transform_body;
///
/// let body = r#"<body><content id="X" type="http://www.ft.com/ontology/content/Article">story</content><table><tr/></table></body>"#;
/// assert_eq!(
///     transform_body(body).unwrap(),
///     r#"<body><ft-content type="http://www.ft.com/ontology/content/Article" url="http://api.ft.com/content/X">story</ft-content></body>"#
/// );
/// ```
pub fn transform_body(body: &str) -> Result<String> {
    DEFAULT_TRANSFORMER.transform(body)
}
