//! The chainable tree builder.

use std::fmt;
use std::rc::Rc;

use console::Style;

use crate::enumerator::{Enumerator, Indenter};
use crate::node::{Children, ChildrenMut, Node, NodeChildren};
use crate::renderer::Renderer;
use crate::style;

/// A named branch with an ordered collection of children, and the builder
/// surface for constructing and rendering trees.
///
/// ```rust
/// use arbor::Tree;
///
/// let tree = Tree::root(".")
///     .child("README.md")
///     .child(Tree::root("src").child("lib.rs").child("main.rs"))
///     .child("Cargo.toml");
///
/// assert_eq!(
///     tree.to_string(),
///     ".
/// ├── README.md
/// ├── src
/// │   ├── lib.rs
/// │   └── main.rs
/// └── Cargo.toml",
/// );
/// ```
///
/// Appending a branch with an empty name merges it into the previous
/// sibling, so flat argument lists nest naturally (see [`Tree::child`]).
#[derive(Clone, Debug, Default)]
pub struct Tree {
    value: String,
    hidden: bool,
    offset: (usize, usize),
    children: NodeChildren,
    renderer: Option<Renderer>,
}

impl Tree {
    /// Creates an empty, nameless tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree with the given root name.
    pub fn root(value: impl Into<String>) -> Self {
        Tree {
            value: value.into(),
            ..Self::default()
        }
    }

    /// The root name of this node. May be empty and may span multiple
    /// lines.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the root name.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether this subtree is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hides or reveals the subtree, chainable at construction.
    pub fn hide(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Hides or reveals the subtree in place.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Clips the visible child window: skips the first `start` children and
    /// drops the last `end`. Arguments are swapped when reversed and clamped
    /// against the collection, so no combination faults.
    pub fn offset(mut self, start: usize, end: usize) -> Self {
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        self.offset = (start, end);
        self
    }

    /// The children inside the current offset window, in display order.
    pub fn children(&self) -> &[Node] {
        let all = self.children.as_slice();
        let len = all.len();
        let lo = self.offset.0.min(len);
        let hi = len.saturating_sub(self.offset.1).max(lo);
        &all[lo..hi]
    }

    /// Mutable access to the full child collection, ignoring any offset.
    pub fn children_mut(&mut self) -> &mut NodeChildren {
        &mut self.children
    }

    /// Appends one item: a string becomes a leaf, a tree becomes a branch.
    ///
    /// A branch with an empty name is merged into the previous sibling
    /// instead of appended: the children of the nameless branch are
    /// transplanted onto a previous branch, or a previous leaf is promoted
    /// to the branch's name. These two trees are therefore identical:
    ///
    /// ```rust
    /// use arbor::Tree;
    ///
    /// let explicit = Tree::root("foo").child(Tree::root("bar").child("zaz"));
    /// let flat = Tree::root("foo").child("bar").child(Tree::new().child("zaz"));
    /// assert_eq!(explicit.to_string(), flat.to_string());
    /// ```
    pub fn child(mut self, item: impl Into<Node>) -> Self {
        self.push_node(item.into());
        self
    }

    /// Appends every item in order, applying the same merge policy as
    /// [`Tree::child`].
    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        for item in items {
            self.push_node(item.into());
        }
        self
    }

    /// Splices a collection: each element is cloned and appended verbatim,
    /// without the merge policy. Use this to pull a [`Filter`](crate::Filter)
    /// view or another tree's children into this one.
    pub fn splice<C: Children + ?Sized>(mut self, data: &C) -> Self {
        for i in 0..data.len() {
            if let Some(node) = data.at(i) {
                self.children.append(node.clone());
            }
        }
        self
    }

    fn push_node(&mut self, node: Node) {
        let branch = match node {
            Node::Branch(branch) => branch,
            leaf => {
                self.children.append(leaf);
                return;
            }
        };
        if !branch.value.is_empty() || self.children.is_empty() {
            self.children.append(Node::Branch(branch));
            return;
        }
        let last = self.children.len() - 1;
        match self.children.get_mut(last) {
            Some(Node::Branch(previous)) => {
                // Transplant the nameless branch's children onto the
                // previous sibling, re-applying the merge policy for each.
                for child in branch.children {
                    previous.push_node(child);
                }
            }
            Some(slot) => {
                // The previous leaf becomes the header of this subtree.
                let mut branch = branch;
                branch.value = slot.value().to_string();
                *slot = Node::Branch(branch);
            }
            None => self.children.append(Node::Branch(branch)),
        }
    }

    /// Replaces the marker enumerator for this subtree.
    pub fn enumerator(mut self, enumerator: Enumerator) -> Self {
        self.renderer_mut().enumerator = enumerator;
        self
    }

    /// Replaces the indenter for this subtree.
    pub fn indenter(mut self, indenter: Indenter) -> Self {
        self.renderer_mut().indenter = indenter;
        self
    }

    /// Applies a fixed style to every marker of this subtree.
    pub fn enumerator_style(mut self, style: Style) -> Self {
        self.renderer_mut().enumerator_style = style::constant(style);
        self
    }

    /// Selects the marker style per index. Use this for conditional
    /// styling.
    pub fn enumerator_style_func(
        mut self,
        func: impl Fn(&dyn Children, usize) -> Style + 'static,
    ) -> Self {
        self.renderer_mut().enumerator_style = Rc::new(func);
        self
    }

    /// Applies a fixed style to every item value of this subtree.
    pub fn item_style(mut self, style: Style) -> Self {
        self.renderer_mut().item_style = style::constant(style);
        self
    }

    /// Selects the item style per index.
    pub fn item_style_func(mut self, func: impl Fn(&dyn Children, usize) -> Style + 'static) -> Self {
        self.renderer_mut().item_style = Rc::new(func);
        self
    }

    /// Styles the root name line.
    pub fn root_style(mut self, style: Style) -> Self {
        self.renderer_mut().root_style = style;
        self
    }

    // Customizing any rendering property gives this subtree its own
    // renderer, owned outright; it is never shared with a parent or
    // sibling.
    fn renderer_mut(&mut self) -> &mut Renderer {
        self.renderer.get_or_insert_with(Renderer::default)
    }

    pub(crate) fn renderer(&self) -> Option<&Renderer> {
        self.renderer.as_ref()
    }

    /// Materializes the rendered output. Rendering is pure: without
    /// intervening mutation, repeated calls return identical strings.
    pub fn render(&self) -> String {
        match &self.renderer {
            Some(renderer) => renderer.render(self, true, ""),
            None => Renderer::default().render(self, true, ""),
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    #[test]
    fn nameless_branch_promotes_previous_leaf() {
        let explicit = Tree::root("foo").child(Tree::root("bar").child("zaz"));
        let flat = Tree::root("foo").child("bar").child(Tree::new().child("zaz"));
        assert_eq!(explicit.render(), flat.render());
        assert_eq!(explicit.render(), "foo\n└── bar\n    └── zaz");
    }

    #[test]
    fn nameless_branch_transplants_onto_previous_branch() {
        let tree = Tree::new()
            .child(Tree::root("a").child("x"))
            .child(Tree::new().child("y").child("z"));
        assert_eq!(tree.render(), "└── a\n    ├── x\n    ├── y\n    └── z");
    }

    #[test]
    fn named_branch_and_first_child_append_unmodified() {
        let tree = Tree::new().child(Tree::new().child("only"));
        // No previous sibling to merge into: the nameless branch stays.
        assert_eq!(tree.render(), "└── \n    └── only");

        let named = Tree::new().child("a").child(Tree::root("b").child("c"));
        assert_eq!(named.render(), "├── a\n└── b\n    └── c");
    }

    #[test]
    fn splice_bypasses_the_merge_policy() {
        let source = Tree::new().child("x").child("y");
        let tree = Tree::root("root").splice(source.children());
        assert_eq!(tree.render(), "root\n├── x\n└── y");
    }

    #[test]
    fn splice_honors_a_filter_view() {
        let data = NodeChildren::strings(["Foo", "Bar", "Baz", "Nope"]);
        let view = Filter::new(data).filter(|i| i != 1);
        let tree = Tree::root("root").splice(&view);
        assert_eq!(tree.render(), "root\n├── Foo\n├── Baz\n└── Nope");
    }

    #[test]
    fn offset_clips_the_child_window() {
        let tree = Tree::root("root").items(["a", "b", "c", "d"]);
        assert_eq!(tree.clone().offset(1, 0).render(), "root\n├── b\n├── c\n└── d");
        assert_eq!(tree.clone().offset(0, 1).render(), "root\n├── a\n├── b\n└── c");
        // Swapped and oversized arguments degrade instead of faulting.
        assert_eq!(tree.clone().offset(3, 1).render(), tree.offset(1, 3).render());
        assert_eq!(Tree::root("root").offset(7, 9).render(), "root");
    }

    #[test]
    fn mutation_through_children_mut_is_visible() {
        let mut tree = Tree::root("root").child("Foo").child("Bar");
        if let Some(node) = tree.children_mut().get_mut(0) {
            node.set_hidden(true);
        }
        assert_eq!(tree.render(), "root\n└── Bar");
    }

    #[test]
    fn items_accepts_mixed_nodes() {
        let tree = Tree::root("root").items([
            Node::from("leaf"),
            Node::from(Tree::root("branch").child("inner")),
        ]);
        assert_eq!(tree.render(), "root\n├── leaf\n└── branch\n    └── inner");
    }
}
