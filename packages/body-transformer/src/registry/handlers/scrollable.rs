//! Handler flattening `scrollable-block` wrappers into the surrounding flow.

use crate::config::{SCROLLABLE_TEXT_TAG, THEME_STYLE_ATTR};
use crate::registry::handler::ElementHandler;
use crate::registry::types::Phase;
use crate::xml::{Document, NodeId};

/// Handler replacing a scrollable block with the content of its
/// `scrollable-text` descendants.
///
/// Child elements of every `scrollable-text` (at any depth) are moved into
/// the block's parent at the block's position, in document order, with their
/// `theme-style` attribute removed. The block itself is then detached along
/// with whatever it still contains.
pub struct ScrollableBlockHandler;

impl ElementHandler for ScrollableBlockHandler {
    fn phase(&self) -> Phase {
        Phase::Flatten
    }

    fn handle(&self, doc: &mut Document, block: NodeId) {
        let (Some(parent), Some(mut cursor)) = (doc.parent(block), doc.index(block)) else {
            return;
        };

        for text in doc.find_elements(block, SCROLLABLE_TEXT_TAG) {
            for child in doc.child_elements(text) {
                if let Some(el) = doc.element_mut(child) {
                    el.remove_attribute(THEME_STYLE_ATTR);
                }
                doc.insert_child_at(parent, cursor, child);
                cursor += 1;
            }
        }

        doc.detach(block);
    }
}
