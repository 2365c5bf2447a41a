//! Predicate-based, re-indexing views over node collections.

use std::fmt;
use std::rc::Rc;

use crate::node::{Children, ChildrenMut, Node};

/// A live, predicate-filtered view over an underlying [`Children`]
/// collection.
///
/// Indices exposed by the view are relative to the filtered results and are
/// re-derived on every call by scanning the underlying collection in order,
/// so `len` is O(N) and `at` is O(N). Nothing is cached: mutating the base
/// collection, or installing a new predicate, is reflected by the very next
/// call.
///
/// A filter is itself a valid [`Children`], so filters compose and can be
/// spliced into a tree like any other collection:
///
/// ```rust
/// use arbor::{Children, Filter, NodeChildren, Tree};
///
/// let data = NodeChildren::strings(["Foo", "Bar", "Baz"]);
/// let evens = Filter::new(data).filter(|i| i % 2 == 0);
/// assert_eq!(evens.len(), 2);
///
/// let tree = Tree::root("root").splice(&evens);
/// assert_eq!(tree.to_string(), "root\n├── Foo\n└── Baz");
/// ```
pub struct Filter<C: Children> {
    data: C,
    predicate: Rc<dyn Fn(usize) -> bool>,
}

impl<C: Children> Filter<C> {
    /// Wraps `data` with an accept-all predicate. Use [`Filter::filter`] to
    /// install the actual condition.
    pub fn new(data: C) -> Self {
        Filter {
            data,
            predicate: Rc::new(|_| true),
        }
    }

    /// Replaces the predicate. The argument the predicate receives is the
    /// index into the **underlying** collection.
    pub fn filter(mut self, predicate: impl Fn(usize) -> bool + 'static) -> Self {
        self.predicate = Rc::new(predicate);
        self
    }

    /// Consumes the view, returning the underlying collection.
    pub fn into_inner(self) -> C {
        self.data
    }
}

impl<C: Children> Children for Filter<C> {
    fn at(&self, index: usize) -> Option<&Node> {
        let mut seen = 0;
        for i in 0..self.data.len() {
            if (self.predicate)(i) {
                if seen == index {
                    return self.data.at(i);
                }
                seen += 1;
            }
        }
        None
    }

    fn len(&self) -> usize {
        (0..self.data.len()).filter(|&i| (self.predicate)(i)).count()
    }
}

impl<C: ChildrenMut> ChildrenMut for Filter<C> {
    /// Appends to the underlying collection. Whether the new node is visible
    /// through the view depends on the installed predicate.
    fn append(&mut self, child: Node) {
        self.data.append(child);
    }

    /// Removes from the underlying collection. The index is an **underlying**
    /// index, not a filtered one.
    fn remove(&mut self, index: usize) {
        self.data.remove(index);
    }
}

impl<C: Children + Clone> Clone for Filter<C> {
    fn clone(&self) -> Self {
        Filter {
            data: self.data.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<C: Children + fmt::Debug> fmt::Debug for Filter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("data", &self.data).finish_non_exhaustive()
    }
}
