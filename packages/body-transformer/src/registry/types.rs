//! Types for the element registry system.

use std::fmt;

use crate::xml::Element;

/// Phase in which a handler runs.
///
/// All rewrite handlers run before any flatten handler, and pruning runs
/// after both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Tag renaming and attribute reconstruction.
    Rewrite,
    /// Structural changes that move nodes between parents.
    Flatten,
}

/// Attribute constraint of a [`PruneRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMatch {
    pub name: String,
    pub value: String,
}

/// Declarative match selecting elements to remove with their subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneRule {
    /// Tag name to match.
    pub tag: String,
    /// Optional attribute that must be present with an exact value.
    pub attribute: Option<AttributeMatch>,
}

impl PruneRule {
    /// Match elements by tag name alone.
    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attribute: None,
        }
    }

    /// Match elements by tag name and an exact attribute value.
    #[must_use]
    pub fn tag_with_attribute(
        tag: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attribute: Some(AttributeMatch {
                name: name.into(),
                value: value.into(),
            }),
        }
    }

    /// Check whether an element matches this rule.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        if element.tag != self.tag {
            return false;
        }
        match &self.attribute {
            Some(attr) => element.attribute(&attr.name) == Some(attr.value.as_str()),
            None => true,
        }
    }
}

impl fmt::Display for PruneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attr) => write!(f, "{}[@{}='{}']", self.tag, attr.name, attr.value),
            None => write!(f, "{}", self.tag),
        }
    }
}

/// Counts of what a transformation changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Elements handled in the rewrite phase.
    pub rewritten: usize,
    /// Elements handled in the flatten phase.
    pub flattened: usize,
    /// Subtrees detached by prune rules.
    pub pruned: usize,
}
