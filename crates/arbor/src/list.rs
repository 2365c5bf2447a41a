//! Lists: flat or nested enumerations rendered as trees.
//!
//! A [`List`] is a thin facade over [`Tree`] with list-shaped defaults: a
//! bullet marker and a single-space indenter. Everything the tree builder
//! supports (nesting, hiding, custom enumerators and styles) applies to
//! lists as well.
//!
//! ```rust
//! use arbor::List;
//!
//! let groceries = List::new()
//!     .item("Bananas")
//!     .item("Milk")
//!     .item(List::new().item("Oat").item("Almond"))
//!     .item("Eggs");
//!
//! assert_eq!(
//!     groceries.to_string(),
//!     "• Bananas
//! • Milk
//!   • Oat
//!   • Almond
//! • Eggs",
//! );
//! ```

use std::fmt;

use console::Style;

use crate::enumerator::{bullet, Enumerator, Indenter};
use crate::node::{Children, Node};
use crate::tree::Tree;

fn space_indenter(_children: &dyn Children, _index: usize) -> String {
    " ".to_string()
}

/// An enumerated list of items. Nesting a list inside a list renders it as
/// a sublist under the preceding item.
#[derive(Clone, Debug)]
pub struct List {
    tree: Tree,
}

impl List {
    /// Creates an empty bulleted list.
    pub fn new() -> Self {
        List {
            tree: Tree::new().enumerator(bullet).indenter(space_indenter),
        }
    }

    /// Appends one item. Strings become entries; a nested [`List`] or
    /// [`Tree`] becomes a sublist under the previous item.
    pub fn item(mut self, item: impl Into<Node>) -> Self {
        self.tree = self.tree.child(item);
        self
    }

    /// Appends every item in order.
    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.tree = self.tree.items(items);
        self
    }

    /// Replaces the marker enumerator, e.g. [`arabic`](crate::arabic) or
    /// [`roman`](crate::roman).
    pub fn enumerator(mut self, enumerator: Enumerator) -> Self {
        self.tree = self.tree.enumerator(enumerator);
        self
    }

    /// Replaces the indenter used for nested content.
    pub fn indenter(mut self, indenter: Indenter) -> Self {
        self.tree = self.tree.indenter(indenter);
        self
    }

    /// Applies a fixed style to every marker.
    pub fn enumerator_style(mut self, style: Style) -> Self {
        self.tree = self.tree.enumerator_style(style);
        self
    }

    /// Selects the marker style per index.
    pub fn enumerator_style_func(
        mut self,
        func: impl Fn(&dyn Children, usize) -> Style + 'static,
    ) -> Self {
        self.tree = self.tree.enumerator_style_func(func);
        self
    }

    /// Applies a fixed style to every item.
    pub fn item_style(mut self, style: Style) -> Self {
        self.tree = self.tree.item_style(style);
        self
    }

    /// Selects the item style per index.
    pub fn item_style_func(mut self, func: impl Fn(&dyn Children, usize) -> Style + 'static) -> Self {
        self.tree = self.tree.item_style_func(func);
        self
    }

    /// Hides or reveals the whole list.
    pub fn hide(mut self, hidden: bool) -> Self {
        self.tree = self.tree.hide(hidden);
        self
    }

    /// Clips the visible window of items: skips the first `start` and drops
    /// the last `end`.
    ///
    /// ```rust
    /// use arbor::List;
    ///
    /// let list = List::new().items(["A", "B", "C", "D"]).offset(1, 0);
    /// assert_eq!(list.to_string(), "• B\n• C\n• D");
    /// ```
    pub fn offset(mut self, start: usize, end: usize) -> Self {
        self.tree = self.tree.offset(start, end);
        self
    }

    /// The name of the list's root node. Empty for lists built through this
    /// facade.
    pub fn value(&self) -> &str {
        self.tree.value()
    }

    /// Materializes the rendered output.
    pub fn render(&self) -> String {
        self.tree.render()
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<List> for Node {
    /// A list becomes a nameless branch, which the merge policy nests under
    /// the preceding item. The list keeps its own renderer, so sublist
    /// markers survive inside a differently-configured parent.
    fn from(list: List) -> Self {
        Node::Branch(list.tree)
    }
}
