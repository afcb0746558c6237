//! In-memory element tree the presentation layer reads and mutates.
//!
//! The validation engine only ever touches attributes, classes, text,
//! and child position, so that surface is all the abstraction carries.
//! Node handles are only valid for the document that created them.

use std::collections::HashMap;

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    attrs: HashMap<String, String>,
    classes: Vec<String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An id-indexed element arena standing in for the host document.
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element with the given tag.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.into(),
            ..Node::default()
        });
        id
    }

    /// Returns the element's tag.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    /// Appends `child` as the last child of `parent`, detaching it from
    /// any previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Inserts `child` as the first child of `parent`.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(0, child);
    }

    /// Removes the element from its parent. The node itself survives in
    /// the arena and can be re-attached.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&child| child != id);
        }
    }

    /// Returns the element's parent, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Returns the element's children in order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Sets an attribute.
    pub fn set_attr(&mut self, id: NodeId, key: impl Into<String>, value: impl Into<String>) {
        self.nodes[id.0].attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    #[must_use]
    pub fn attr(&self, id: NodeId, key: &str) -> Option<&str> {
        self.nodes[id.0].attrs.get(key).map(String::as_str)
    }

    /// Replaces the element's text content.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.nodes[id.0].text = text.into();
    }

    /// Returns the element's text content.
    #[must_use]
    pub fn text(&self, id: NodeId) -> &str {
        &self.nodes[id.0].text
    }

    /// Adds a class token; a no-op when already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let classes = &mut self.nodes[id.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    /// Removes a class token if present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.nodes[id.0].classes.retain(|c| c != class);
    }

    /// Returns whether the element carries the class token.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id.0].classes.iter().any(|c| c == class)
    }

    /// Descendants of `root` in tree (pre-order) order, excluding `root`.
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[root.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            result.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        result
    }

    /// All descendants with the given tag, in tree order.
    #[must_use]
    pub fn descendants_with_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.tag(id) == tag)
            .collect()
    }

    /// First descendant carrying the class token, in tree order.
    #[must_use]
    pub fn first_descendant_with_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.has_class(id, class))
    }
}
