//! The recursive rendering algorithm.
//!
//! A [`Renderer`] bundles the marker protocol (enumerator + indenter) with
//! the style hooks for one subtree. Trees carry no renderer by default; one
//! is created on first customization and owned outright by that node, and a
//! subtree without its own renderer inherits the nearest ancestor's at
//! render time, resolved while recursing.
//!
//! Layout invariants, per level:
//!
//! - Hidden siblings are excluded before anything else happens: they produce
//!   no line, occupy no index, and the last *visible* sibling receives the
//!   terminal marker.
//! - Markers are right-aligned within the level: a first pass measures every
//!   styled marker and a second pass left-pads each one to the widest.
//! - Multi-line values keep their continuation lines inside the marker
//!   column: the column is extended downward with the indenter, and the
//!   inherited ancestor prefix is repeated on every continuation line.

use std::fmt;

use console::Style;

use crate::enumerator::{default_enumerator, default_indenter, Enumerator, Indenter};
use crate::node::{Children, Node};
use crate::style::{self, StyleFunc};
use crate::text::{display_width, pad_left, pad_right};
use crate::tree::Tree;

/// Rendering configuration for one subtree: marker protocol plus style
/// hooks.
#[derive(Clone)]
pub(crate) struct Renderer {
    pub(crate) enumerator: Enumerator,
    pub(crate) indenter: Indenter,
    pub(crate) enumerator_style: StyleFunc,
    pub(crate) item_style: StyleFunc,
    pub(crate) root_style: Style,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer {
            enumerator: default_enumerator,
            indenter: default_indenter,
            enumerator_style: style::identity(),
            item_style: style::identity(),
            root_style: Style::new(),
        }
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

/// The visible siblings of one level, in display order. This is the
/// collection enumerators, indenters, and style hooks receive, so their
/// indices and length never account for hidden nodes.
struct Level<'a> {
    nodes: Vec<&'a Node>,
}

impl<'a> Level<'a> {
    fn visible(children: &'a [Node]) -> Self {
        Level {
            nodes: children.iter().filter(|node| !node.is_hidden()).collect(),
        }
    }
}

impl Children for Level<'_> {
    fn at(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index).copied()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Renderer {
    /// Renders `tree` and its descendants. `prefix` is the accumulated
    /// indentation of all ancestor levels, prepended to every produced line.
    pub(crate) fn render(&self, tree: &Tree, is_root: bool, prefix: &str) -> String {
        if tree.is_hidden() {
            return String::new();
        }

        let mut blocks: Vec<String> = Vec::new();
        if is_root && !tree.value().is_empty() {
            blocks.push(style::apply_lines(&self.root_style, tree.value()).join("\n"));
        }

        let level = Level::visible(tree.children());

        // First pass: the marker column is as wide as the widest styled
        // marker of this level.
        let mut marker_width = 0;
        for i in 0..level.len() {
            let marker = (self.enumerator)(&level, i);
            let styled = (self.enumerator_style)(&level, i).apply_to(marker).to_string();
            marker_width = marker_width.max(display_width(&styled));
        }

        // Second pass: compose each sibling's lines and recurse.
        for i in 0..level.len() {
            let child: &Node = level.nodes[i];
            let marker_style = (self.enumerator_style)(&level, i);
            let item_style = (self.item_style)(&level, i);

            let marker = marker_style.apply_to((self.enumerator)(&level, i)).to_string();
            let indent = marker_style.apply_to((self.indenter)(&level, i)).to_string();

            // The marker cell is right-aligned and followed by a one-space
            // gap; continuation cells repeat the indenter under it.
            let head = format!("{} ", pad_left(&marker, marker_width));
            let continuation = format!("{indent} ");

            let item_lines = style::apply_lines(&item_style, child.value());
            let mut cells = vec![head];
            while cells.len() < item_lines.len() {
                cells.push(continuation.clone());
            }
            let column_width = cells.iter().map(|cell| display_width(cell)).max().unwrap_or(0);

            let lines: Vec<String> = cells
                .iter()
                .zip(&item_lines)
                .map(|(cell, item_line)| {
                    format!("{prefix}{}{item_line}", pad_right(cell, column_width))
                })
                .collect();
            blocks.push(lines.join("\n"));

            if let Node::Branch(subtree) = child {
                let renderer = subtree.renderer().unwrap_or(self);
                let rendered = renderer.render(subtree, false, &format!("{prefix}{continuation}"));
                if !rendered.is_empty() {
                    blocks.push(rendered);
                }
            }
        }

        blocks.join("\n")
    }
}
