//! Mutable document tree.
//!
//! Nodes live in an arena owned by the [`Document`]. A node's parent link is a
//! plain index; only the parent's child list decides ownership. Detaching a
//! node removes it from that list and leaves its subtree intact in the arena,
//! unreachable from the root.

/// Handle to a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A name/value pair scoped to one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A tagged element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified tag name, including any namespace prefix.
    pub tag: String,
    /// Attributes in serialization order.
    pub attributes: Vec<Attribute>,
}

impl Element {
    /// Create an element without attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Remove an attribute and return its value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let pos = self.attributes.iter().position(|attr| attr.name == name)?;
        Some(self.attributes.remove(pos).value)
    }

    /// Set an attribute value.
    ///
    /// An existing attribute keeps its position and gets the new value;
    /// otherwise the attribute is appended to the end of the list.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute::new(name, value)),
        }
    }
}

/// Payload of a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root. Exactly one per document.
    Root,
    Element(Element),
    /// Unescaped character data.
    Text(String),
    Comment(String),
    ProcessingInstruction {
        target: String,
        value: Option<String>,
    },
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed body document.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    declaration: Option<String>,
    doctype: Option<String>,
}

impl Document {
    /// Create an empty document holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
            declaration: None,
            doctype: None,
        }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The XML declaration the body started with, if any.
    #[must_use]
    pub fn declaration(&self) -> Option<&str> {
        self.declaration.as_deref()
    }

    pub fn set_declaration(&mut self, declaration: impl Into<String>) {
        self.declaration = Some(declaration.into());
    }

    /// The document type declaration, as written in the body together with
    /// the whitespace in front of it.
    #[must_use]
    pub fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }

    pub fn set_doctype(&mut self, doctype: impl Into<String>) {
        self.doctype = Some(doctype.into());
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    /// Get the element payload of a node, if it is an element.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.node(id).kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.node_mut(id).kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Tag name of an element node.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|element| element.tag.as_str())
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Element children of a node, in order.
    #[must_use]
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.element(*child).is_some())
            .collect()
    }

    /// Position of a node among its parent's children.
    #[must_use]
    pub fn index(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|child| *child == id)
    }

    /// All nodes below `id` in document order, excluding `id` itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();

        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }

        result
    }

    /// All elements below `id` with the given tag, in document order.
    ///
    /// The result is a snapshot; mutating the tree afterwards does not
    /// invalidate it.
    #[must_use]
    pub fn find_elements(&self, id: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|node| self.tag(*node) == Some(tag))
            .collect()
    }

    /// Create a node and append it as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.node_mut(parent).children.push(id);
        id
    }

    /// Move `child` into `parent`'s child list at `index`.
    ///
    /// The child is detached from its current parent first. An index past the
    /// end appends. When the child moves forward within the same parent the
    /// index refers to the list before removal.
    pub fn insert_child_at(&mut self, parent: NodeId, index: usize, child: NodeId) {
        let mut index = index;
        if let Some(old_parent) = self.parent(child) {
            if let Some(old_index) = self.index(child) {
                self.node_mut(old_parent).children.remove(old_index);
                if old_parent == parent && old_index < index {
                    index -= 1;
                }
            }
        }

        let children = &mut self.node_mut(parent).children;
        let index = index.min(children.len());
        children.insert(index, child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Detach a node (and its subtree) from its parent.
    ///
    /// Returns `false` if the node was already detached.
    pub fn detach(&mut self, id: NodeId) -> bool {
        let Some(parent) = self.parent(id) else {
            return false;
        };
        let Some(index) = self.index(id) else {
            return false;
        };

        self.node_mut(parent).children.remove(index);
        self.node_mut(id).parent = None;
        true
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
