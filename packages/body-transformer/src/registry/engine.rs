//! Transform engine that applies registry rules to a document.

use super::core::ElementRegistry;
use super::types::{Phase, TransformStats};
use crate::xml::Document;

/// Engine that applies the rules of a registry to a document.
///
/// Rules run in three strictly ordered steps:
/// 1. rewrite handlers, in registration order
/// 2. flatten handlers, in registration order
/// 3. prune rules, in order
///
/// For every handler and every prune rule the full set of matches is
/// collected before the tree is touched. A prune rule only sees the tree as
/// left by the previous rules, so nodes removed earlier are never matched.
pub struct TransformEngine {
    registry: ElementRegistry,
}

impl TransformEngine {
    /// Create a new engine with the given registry.
    #[must_use]
    pub fn new(registry: ElementRegistry) -> Self {
        Self { registry }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Apply all rules to the document.
    pub fn apply(&self, doc: &mut Document) -> TransformStats {
        let mut stats = TransformStats::default();

        for phase in [Phase::Rewrite, Phase::Flatten] {
            for (tag, handler) in self.registry.handlers(phase) {
                let matches = doc.find_elements(doc.root(), tag);
                for element in &matches {
                    handler.handle(doc, *element);
                }

                match phase {
                    Phase::Rewrite => stats.rewritten += matches.len(),
                    Phase::Flatten => stats.flattened += matches.len(),
                }
            }
        }

        for rule in self.registry.prune_rules() {
            let matches: Vec<_> = doc
                .descendants(doc.root())
                .into_iter()
                .filter(|id| doc.element(*id).is_some_and(|el| rule.matches(el)))
                .collect();

            for element in matches {
                if doc.detach(element) {
                    tracing::trace!(rule = %rule, "Pruned element");
                    stats.pruned += 1;
                }
            }
        }

        tracing::debug!(
            rewritten = stats.rewritten,
            flattened = stats.flattened,
            pruned = stats.pruned,
            "Applied body rules"
        );

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::handler::ElementHandler;
    use crate::registry::types::PruneRule;
    use crate::xml::{parse_document, write_document, NodeId};

    struct RenameHandler {
        phase: Phase,
        to: &'static str,
    }

    impl ElementHandler for RenameHandler {
        fn phase(&self) -> Phase {
            self.phase
        }

        fn handle(&self, doc: &mut Document, element: NodeId) {
            if let Some(el) = doc.element_mut(element) {
                el.tag = self.to.to_string();
            }
        }
    }

    fn run(registry: ElementRegistry, body: &str) -> (String, TransformStats) {
        let engine = TransformEngine::new(registry);
        let mut doc = parse_document(body).unwrap();
        let stats = engine.apply(&mut doc);
        (write_document(&doc).unwrap(), stats)
    }

    #[test]
    fn test_rewrite_runs_before_flatten() {
        let mut registry = ElementRegistry::new();
        // Registered first, but only sees the output of the rewrite phase
        registry.register(
            "b",
            RenameHandler {
                phase: Phase::Flatten,
                to: "c",
            },
        );
        registry.register(
            "a",
            RenameHandler {
                phase: Phase::Rewrite,
                to: "b",
            },
        );

        let (out, stats) = run(registry, "<a/>");
        assert_eq!(out, "<c/>");
        assert_eq!(stats.rewritten, 1);
        assert_eq!(stats.flattened, 1);
    }

    #[test]
    fn test_prune_sees_rewritten_tags() {
        let mut registry = ElementRegistry::new();
        registry.register(
            "related",
            RenameHandler {
                phase: Phase::Rewrite,
                to: "ft-related",
            },
        );
        registry.prune_tags(["ft-related", "related"]);

        let (out, stats) = run(registry, "<body><related>x</related>y</body>");
        assert_eq!(out, "<body>y</body>");
        assert_eq!(stats.pruned, 1);
    }

    #[test]
    fn test_overlapping_prune_rules_are_benign() {
        let mut registry = ElementRegistry::new();
        registry.prune_tags(["promo-box", "img"]);
        registry.prune(PruneRule::tag_with_attribute("img", "class", "x"));

        let (out, stats) = run(
            registry,
            r#"<body><promo-box><img class="x"/></promo-box><img/>z</body>"#,
        );
        assert_eq!(out, "<body>z</body>");
        assert_eq!(stats.pruned, 2);
    }

    #[test]
    fn test_nested_matches_of_one_rule() {
        let mut registry = ElementRegistry::new();
        registry.prune_tags(["table"]);

        let (out, _) = run(
            registry,
            "<body>A<table><tr><td><table/></td></tr></table>B</body>",
        );
        assert_eq!(out, "<body>AB</body>");
    }

    #[test]
    fn test_empty_registry_is_identity() {
        let body = r#"<body><p class="x">text</p></body>"#;
        let (out, stats) = run(ElementRegistry::new(), body);
        assert_eq!(out, body);
        assert_eq!(stats, TransformStats::default());
    }
}
