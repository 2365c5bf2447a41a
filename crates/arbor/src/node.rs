//! The tree node model: leaves, branches, and ordered children collections.
//!
//! A [`Node`] is either a [`Leaf`] (a bare display value) or a branch (a
//! [`Tree`] with a name and children of its own). Both carry an independent
//! hidden flag; hiding a node removes it and its whole subtree from rendered
//! output without removing it from the model.
//!
//! Collections of nodes are addressed through the [`Children`] read contract
//! and mutated through [`ChildrenMut`]. Every operation is total: an
//! out-of-range index yields `None` or is a no-op, never a panic.

use std::fmt;

use crate::tree::Tree;

/// A node in a tree: either a bare value or a named branch with children.
///
/// The variant set is closed. Rendering and layout dispatch over these two
/// cases by pattern matching, so a node is never anything other than a leaf
/// or a branch.
#[derive(Clone, Debug)]
pub enum Node {
    /// A childless node holding only a display value.
    Leaf(Leaf),
    /// A named subtree.
    Branch(Tree),
}

impl Node {
    /// The display value: the leaf text or the branch name.
    ///
    /// May be empty and may span multiple lines.
    pub fn value(&self) -> &str {
        match self {
            Node::Leaf(leaf) => leaf.value(),
            Node::Branch(tree) => tree.value(),
        }
    }

    /// Replaces the display value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        match self {
            Node::Leaf(leaf) => leaf.set_value(value),
            Node::Branch(tree) => tree.set_value(value),
        }
    }

    /// Whether this node (and therefore its whole subtree) is hidden.
    pub fn is_hidden(&self) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.is_hidden(),
            Node::Branch(tree) => tree.is_hidden(),
        }
    }

    /// Hides or reveals this node.
    pub fn set_hidden(&mut self, hidden: bool) {
        match self {
            Node::Leaf(leaf) => leaf.set_hidden(hidden),
            Node::Branch(tree) => tree.set_hidden(hidden),
        }
    }

    /// The node's children, in display order. Empty for leaves; for branches
    /// this is the offset-clipped window (see [`Tree::offset`]).
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Branch(tree) => tree.children(),
        }
    }

    /// Mutable access to a branch's child collection; `None` for leaves.
    pub fn children_mut(&mut self) -> Option<&mut NodeChildren> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(tree) => Some(tree.children_mut()),
        }
    }
}

impl fmt::Display for Node {
    /// A leaf displays as its value; a branch displays as its rendered
    /// subtree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => leaf.fmt(f),
            Node::Branch(tree) => tree.fmt(f),
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Tree> for Node {
    fn from(tree: Tree) -> Self {
        Node::Branch(tree)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Leaf(Leaf::new(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Leaf(Leaf::new(value))
    }
}

/// A childless node holding a display value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaf {
    value: String,
    hidden: bool,
}

impl Leaf {
    /// Creates a visible leaf with the given value.
    pub fn new(value: impl Into<String>) -> Self {
        Leaf {
            value: value.into(),
            hidden: false,
        }
    }

    /// Hides or reveals the leaf, chainable at construction:
    ///
    /// ```rust
    /// use arbor::Leaf;
    ///
    /// let secret = Leaf::new("not for display").hide(true);
    /// assert!(secret.is_hidden());
    /// ```
    pub fn hide(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// The leaf's display value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the leaf's display value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the leaf is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hides or reveals the leaf in place.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Read access to an ordered collection of nodes.
///
/// This is the contract enumerators, indenters, and style hooks see at render
/// time. Implemented by [`NodeChildren`], by plain `[Node]` slices, and by
/// [`Filter`](crate::Filter) views, so filtered and unfiltered collections
/// are interchangeable wherever siblings are consumed.
pub trait Children {
    /// The node at `index`, or `None` when `index` is out of range.
    fn at(&self, index: usize) -> Option<&Node>;

    /// The number of nodes in the collection.
    fn len(&self) -> usize;

    /// Whether the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutation access to an ordered collection of nodes.
pub trait ChildrenMut: Children {
    /// Appends a node at the end of the collection. Amortized O(1) for
    /// [`NodeChildren`].
    fn append(&mut self, child: Node);

    /// Removes the node at `index`. Out-of-range indices are a no-op.
    fn remove(&mut self, index: usize);
}

impl Children for [Node] {
    fn at(&self, index: usize) -> Option<&Node> {
        self.get(index)
    }

    fn len(&self) -> usize {
        <[Node]>::len(self)
    }
}

/// An ordered, index-addressable collection of nodes. Insertion order is the
/// display order.
#[derive(Clone, Debug, Default)]
pub struct NodeChildren {
    nodes: Vec<Node>,
}

impl NodeChildren {
    /// Creates an empty collection.
    pub const fn new() -> Self {
        NodeChildren { nodes: Vec::new() }
    }

    /// Creates a collection of leaves from string values.
    ///
    /// ```rust
    /// use arbor::{Children, NodeChildren};
    ///
    /// let data = NodeChildren::strings(["Foo", "Bar"]);
    /// assert_eq!(data.at(1).map(|n| n.value()), Some("Bar"));
    /// ```
    pub fn strings<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        values
            .into_iter()
            .map(|value| Node::Leaf(Leaf::new(value)))
            .collect()
    }

    /// Replaces the node at `index`, dropping the previous occupant.
    /// Out-of-range indices are a no-op.
    pub fn replace(&mut self, index: usize, child: Node) {
        if let Some(slot) = self.nodes.get_mut(index) {
            *slot = child;
        }
    }

    /// Mutable access to the node at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    /// Iterates the nodes in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// The collection as a contiguous slice.
    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }
}

impl Children for NodeChildren {
    fn at(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl ChildrenMut for NodeChildren {
    fn append(&mut self, child: Node) {
        self.nodes.push(child);
    }

    fn remove(&mut self, index: usize) {
        if index < self.nodes.len() {
            self.nodes.remove(index);
        }
    }
}

impl FromIterator<Node> for NodeChildren {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        NodeChildren {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for NodeChildren {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeChildren {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
