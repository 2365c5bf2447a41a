//! Per-index style hooks for markers and item text.
//!
//! Styling is consumed as an opaque capability: a [`console::Style`] is
//! applied to a piece of text and a decorated string comes back. The crate
//! never inspects styles; alignment is measured on the decorated output with
//! [`display_width`](crate::text::display_width), which ignores ANSI escape
//! sequences.

use std::rc::Rc;

use console::Style;

use crate::node::Children;

/// Selects a style for the node at `index`. Used for conditional styling,
/// e.g. highlighting a selected row:
///
/// ```rust
/// use arbor::{Style, Tree};
///
/// let selected = 1;
/// let tree = Tree::new()
///     .child("Foo")
///     .child("Bar")
///     .item_style_func(move |_, i| {
///         if i == selected {
///             Style::new().bold()
///         } else {
///             Style::new()
///         }
///     });
/// ```
pub type StyleFunc = Rc<dyn Fn(&dyn Children, usize) -> Style>;

/// The identity hook: every node gets the no-op style.
pub(crate) fn identity() -> StyleFunc {
    Rc::new(|_, _| Style::new())
}

/// Wraps a fixed style into a hook that returns it for every node.
pub(crate) fn constant(style: Style) -> StyleFunc {
    Rc::new(move |_, _| style.clone())
}

/// Applies `style` to `text` line by line, so prefixes composed in front of
/// continuation lines are never caught inside an escape sequence.
pub(crate) fn apply_lines(style: &Style, text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| style.apply_to(line).to_string())
        .collect()
}
