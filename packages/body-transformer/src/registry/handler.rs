//! Element handler trait definition.

use super::types::Phase;
use crate::xml::{Document, NodeId};

/// Trait for element handlers.
///
/// A handler is registered for a tag name and is called once for every
/// element with that tag, in document order. Matches are collected before
/// the first call, so a handler may freely move or detach nodes.
pub trait ElementHandler: Send + Sync {
    /// Return the phase this handler runs in.
    fn phase(&self) -> Phase;

    /// Transform one matched element in place.
    fn handle(&self, doc: &mut Document, element: NodeId);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    struct UppercaseHandler;

    impl ElementHandler for UppercaseHandler {
        fn phase(&self) -> Phase {
            Phase::Rewrite
        }

        fn handle(&self, doc: &mut Document, element: NodeId) {
            if let Some(el) = doc.element_mut(element) {
                el.tag = el.tag.to_uppercase();
            }
        }
    }

    #[test]
    fn test_handler_trait() {
        let handler = UppercaseHandler;
        assert_eq!(handler.phase(), Phase::Rewrite);

        let mut doc = parse_document("<p/>").unwrap();
        let p = doc.find_elements(doc.root(), "p")[0];
        handler.handle(&mut doc, p);

        assert_eq!(doc.tag(p), Some("P"));
    }
}
