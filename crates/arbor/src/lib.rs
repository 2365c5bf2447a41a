//! # Arbor - Tree & List Rendering for the Terminal
//!
//! `arbor` renders hierarchical data - trees of named branches and leaf
//! values - into aligned, ANSI-ready text. Markers, indentation, and colors
//! are pluggable per subtree, and per-node visibility is honored throughout
//! the layout.
//!
//! ## Core Concepts
//!
//! - [`Tree`]: the chainable builder and the branch node type
//! - [`Leaf`] / [`Node`]: the two-variant node model
//! - [`Children`] / [`NodeChildren`] / [`Filter`]: ordered collections and
//!   live predicate views over them
//! - [`Enumerator`] / [`Indenter`]: pure functions producing the marker in
//!   front of a node and the indentation under it
//! - [`StyleFunc`]: per-index [`Style`] selection for markers and items
//! - [`List`]: list-shaped facade with bullet, arabic, alphabet, and roman
//!   built-ins
//!
//! ## Quick Start
//!
//! ```rust
//! use arbor::Tree;
//!
//! let tree = Tree::root("~/projects")
//!     .child("notes.md")
//!     .child(
//!         Tree::root("arbor")
//!             .child("Cargo.toml")
//!             .child(Tree::root("src").child("lib.rs")),
//!     );
//!
//! assert_eq!(
//!     tree.to_string(),
//!     "~/projects
//! ├── notes.md
//! └── arbor
//!     ├── Cargo.toml
//!     └── src
//!         └── lib.rs",
//! );
//! ```
//!
//! ## Styling
//!
//! Styling is delegated to [`console::Style`]: a style is applied to the
//! marker and item text, and alignment is computed on the decorated output
//! with [`display_width`], which ignores escape sequences. Styles can be
//! fixed or selected per index:
//!
//! ```rust
//! use arbor::{Style, Tree};
//!
//! let tree = Tree::root("todo")
//!     .child("ship it")
//!     .child("write docs")
//!     .enumerator_style(Style::new().dim())
//!     .item_style_func(|_, i| if i == 0 { Style::new().bold() } else { Style::new() });
//! ```
//!
//! ## Visibility
//!
//! Hiding a node removes it and its whole subtree from the output. Layout
//! stays stable: the last *visible* sibling receives the terminal marker.
//!
//! ```rust
//! use arbor::{Leaf, Tree};
//!
//! let tree = Tree::new()
//!     .child("Foo")
//!     .child(Leaf::new("Bar").hide(true))
//!     .child("Baz");
//!
//! assert_eq!(tree.to_string(), "├── Foo\n└── Baz");
//! ```
//!
//! Construction and rendering are single-threaded, synchronous, and total:
//! no operation panics or fails, degenerate inputs degrade to empty output.
//! Rendering recurses per tree level, which is ample for interactive
//! CLI-scale trees.

pub mod enumerator;
pub mod filter;
pub mod list;
pub mod node;
mod renderer;
pub mod style;
pub mod text;
pub mod tree;

pub use console::Style;

pub use enumerator::{
    alphabet, arabic, asterisk, bullet, dash, default_enumerator, default_indenter,
    rounded_enumerator, roman, Enumerator, Indenter,
};
pub use filter::Filter;
pub use list::List;
pub use node::{Children, ChildrenMut, Leaf, Node, NodeChildren};
pub use style::StyleFunc;
pub use text::display_width;
pub use tree::Tree;
