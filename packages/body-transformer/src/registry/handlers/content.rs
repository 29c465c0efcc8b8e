//! Handler for the content tag family (`content`, `related`, `concept`).
//!
//! These elements reference other resources by `id` and `type`. For external
//! consumers they are renamed to their `ft-` form and the reference is turned
//! into an API URL.

use crate::config::{api_url, ID_ATTR, TYPE_ATTR, URL_ATTR};
use crate::registry::handler::ElementHandler;
use crate::registry::types::Phase;
use crate::xml::{Document, NodeId};

/// Handler renaming a content tag and rebuilding its reference attributes.
///
/// The `id` attribute is dropped. `type` and `url` are moved to the end of
/// the attribute list, with `url` synthesized from `id` and `type`. Any
/// existing `url` is discarded.
pub struct ContentTagHandler {
    renamed: String,
}

impl ContentTagHandler {
    /// Create a handler that renames matched elements to `renamed`.
    #[must_use]
    pub fn new(renamed: impl Into<String>) -> Self {
        Self {
            renamed: renamed.into(),
        }
    }
}

impl ElementHandler for ContentTagHandler {
    fn phase(&self) -> Phase {
        Phase::Rewrite
    }

    fn handle(&self, doc: &mut Document, element: NodeId) {
        let Some(el) = doc.element_mut(element) else {
            return;
        };

        el.tag.clone_from(&self.renamed);

        let id = el.remove_attribute(ID_ATTR);
        let content_type = el.remove_attribute(TYPE_ATTR);
        el.remove_attribute(URL_ATTR);

        if let Some(content_type) = &content_type {
            el.set_attribute(TYPE_ATTR, content_type.as_str());
        }
        if let (Some(id), Some(content_type)) = (&id, &content_type) {
            el.set_attribute(URL_ATTR, api_url(content_type, id));
        }
    }
}
