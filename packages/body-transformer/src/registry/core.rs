//! Element registry for mapping tag names to handlers and prune rules.

use std::collections::HashSet;

use super::handler::ElementHandler;
use super::types::{Phase, PruneRule};

/// Registry of element handlers and prune rules.
///
/// Registration order is significant: handlers of one phase run in the order
/// they were registered, and prune rules are applied in order.
pub struct ElementRegistry {
    handlers: Vec<(String, Box<dyn ElementHandler>)>,
    prune_rules: Vec<PruneRule>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            prune_rules: Vec::new(),
        }
    }

    /// Register a handler for a specific tag name.
    pub fn register(
        &mut self,
        tag_name: impl Into<String>,
        handler: impl ElementHandler + 'static,
    ) {
        self.handlers.push((tag_name.into(), Box::new(handler)));
    }

    /// Add a prune rule.
    pub fn prune(&mut self, rule: PruneRule) {
        self.prune_rules.push(rule);
    }

    /// Add tag-only prune rules for each tag name.
    pub fn prune_tags(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.prune_rules.push(PruneRule::tag(tag));
        }
    }

    /// Handlers of one phase, in registration order.
    pub fn handlers(&self, phase: Phase) -> impl Iterator<Item = (&str, &dyn ElementHandler)> {
        self.handlers
            .iter()
            .filter(move |(_, handler)| handler.phase() == phase)
            .map(|(tag, handler)| (tag.as_str(), handler.as_ref()))
    }

    /// Prune rules in application order.
    #[must_use]
    pub fn prune_rules(&self) -> &[PruneRule] {
        &self.prune_rules
    }

    /// Check if a handler is registered for a tag.
    #[must_use]
    pub fn has_handler(&self, tag_name: &str) -> bool {
        self.handlers.iter().any(|(tag, _)| tag == tag_name)
    }

    /// Check if every element with this tag is pruned, regardless of attributes.
    #[must_use]
    pub fn should_prune_tag(&self, tag_name: &str) -> bool {
        self.prune_rules
            .iter()
            .any(|rule| rule.tag == tag_name && rule.attribute.is_none())
    }

    /// Return set of all tag names with a registered handler.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.handlers.iter().map(|(tag, _)| tag.as_str()).collect()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
