//! Registry configuration for article body transformation.

use super::core::ElementRegistry;
use super::handlers::{ContentTagHandler, ScrollableBlockHandler};
use super::types::PruneRule;
use crate::config::{IMAGE_SET_TYPE, MEDIA_RESOURCE_TYPE, SCROLLABLE_BLOCK_TAG, TYPE_ATTR};

/// Create a registry configured for article bodies.
///
/// This registry holds the full production rule set: content tag rewrites,
/// scrollable block flattening and subtree pruning.
#[must_use]
pub fn create_body_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    // Rewrite handlers
    registry.register("content", ContentTagHandler::new("ft-content"));
    registry.register("related", ContentTagHandler::new("ft-related"));
    registry.register("concept", ContentTagHandler::new("ft-concept"));

    // Flatten handlers
    registry.register(SCROLLABLE_BLOCK_TAG, ScrollableBlockHandler);

    // Prune rules - elements removed with everything inside them
    //
    // Rich components with no external rendering:
    //   - pull-quote, promo-box, big-number: editorial furniture
    //   - timeline/ft-timeline: interactive timelines
    //   - table, img: layout and images, delivered separately
    //   - experimental, recommended: internal-only blocks
    //
    // ft-related is matched by its rewritten name.
    registry.prune_tags([
        "pull-quote",
        "promo-box",
        "ft-related",
        "timeline",
        "ft-timeline",
        "table",
        "big-number",
        "img",
        "experimental",
        "recommended",
    ]);

    // Embedded third-party and media elements
    registry.prune(PruneRule::tag_with_attribute(
        "blockquote",
        "class",
        "twitter-tweet",
    ));
    registry.prune(PruneRule::tag_with_attribute(
        "a",
        "data-asset-type",
        "video",
    ));
    registry.prune(PruneRule::tag_with_attribute(
        "a",
        "data-asset-type",
        "interactive-graphic",
    ));

    // Embedded images and media, matched after the content rewrite
    registry.prune(PruneRule::tag_with_attribute(
        "ft-content",
        TYPE_ATTR,
        IMAGE_SET_TYPE,
    ));
    registry.prune(PruneRule::tag_with_attribute(
        "ft-content",
        TYPE_ATTR,
        MEDIA_RESOURCE_TYPE,
    ));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Phase;

    #[test]
    fn test_create_body_registry() {
        let registry = create_body_registry();

        // Check rewrite handlers
        assert!(registry.has_handler("content"));
        assert!(registry.has_handler("related"));
        assert!(registry.has_handler("concept"));

        // Check flatten handler
        let flatten: Vec<_> = registry.handlers(Phase::Flatten).map(|(t, _)| t).collect();
        assert_eq!(flatten, ["scrollable-block"]);

        // Check prune rules
        assert!(registry.should_prune_tag("pull-quote"));
        assert!(registry.should_prune_tag("ft-related"));
        assert!(registry.should_prune_tag("recommended"));
        assert!(!registry.should_prune_tag("related"));
        assert!(!registry.should_prune_tag("ft-content"));
        assert_eq!(registry.prune_rules().len(), 15);
    }

    #[test]
    fn test_rewrite_handlers_order() {
        let registry = create_body_registry();
        let rewrite: Vec<_> = registry.handlers(Phase::Rewrite).map(|(t, _)| t).collect();
        assert_eq!(rewrite, ["content", "related", "concept"]);
    }
}
