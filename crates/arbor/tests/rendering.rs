//! Golden-output tests for the tree and list renderers.

use arbor::{
    arabic, display_width, roman, rounded_enumerator, Children, Leaf, List, Node, Style, Tree,
};

fn demo_tree() -> Tree {
    Tree::new()
        .child("Foo")
        .child(
            Tree::root("Bar")
                .child("Qux")
                .child(Tree::root("Quux").child("Foo").child("Bar"))
                .child("Quuux"),
        )
        .child("Baz")
}

// =============================================================================
// Default tree markers
// =============================================================================

#[test]
fn nested_tree() {
    let expected = "\
├── Foo
├── Bar
│   ├── Qux
│   ├── Quux
│   │   ├── Foo
│   │   └── Bar
│   └── Quuux
└── Baz";
    assert_eq!(demo_tree().render(), expected);
}

#[test]
fn rooted_tree() {
    let tree = Tree::root("The Root")
        .child("Foo")
        .child(Tree::root("Bar").child("Qux").child("Quuux"))
        .child("Baz");

    let expected = "\
The Root
├── Foo
├── Bar
│   ├── Qux
│   └── Quuux
└── Baz";
    assert_eq!(tree.render(), expected);
}

#[test]
fn subtree_in_last_position() {
    let tree = Tree::new().child("Foo").child(
        Tree::root("Bar")
            .child("Qux")
            .child(Tree::root("Quux").child("Foo").child("Bar"))
            .child("Quuux"),
    );

    let expected = "\
├── Foo
└── Bar
    ├── Qux
    ├── Quux
    │   ├── Foo
    │   └── Bar
    └── Quuux";
    assert_eq!(tree.render(), expected);
}

#[test]
fn display_matches_render() {
    let tree = demo_tree();
    assert_eq!(tree.to_string(), tree.render());
    assert_eq!(Node::from(demo_tree()).to_string(), tree.render());
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn hidden_leaf_shifts_the_terminal_marker() {
    let tree = Tree::new()
        .child("Foo")
        .child(Leaf::new("Bar").hide(true))
        .child("Baz");
    assert_eq!(tree.render(), "├── Foo\n└── Baz");
}

#[test]
fn hidden_subtree_disappears_entirely() {
    let tree = Tree::new()
        .child("Foo")
        .child(
            Tree::root("Bar")
                .child("Qux")
                .child(Tree::root("Quux").child("Foo").child("Bar").hide(true))
                .child("Quuux"),
        )
        .child("Baz");

    let expected = "\
├── Foo
├── Bar
│   ├── Qux
│   └── Quuux
└── Baz";
    assert_eq!(tree.render(), expected);
}

#[test]
fn hiding_after_construction_relayouts_the_level() {
    let mut tree = Tree::new()
        .child("Foo")
        .child(
            Tree::root("Bar")
                .child("Qux")
                .child(Tree::root("Quux").child("Hello!"))
                .child("Quuux"),
        )
        .child("Baz");

    // Hide "Quuux": "Quux" becomes the last visible sibling of its level.
    let bar = tree.children_mut().get_mut(1).expect("Bar exists");
    let bar_children = bar.children_mut().expect("Bar is a branch");
    if let Some(quuux) = bar_children.get_mut(2) {
        quuux.set_hidden(true);
    }

    let expected = "\
├── Foo
├── Bar
│   ├── Qux
│   └── Quux
│       └── Hello!
└── Baz";
    assert_eq!(tree.render(), expected);
}

#[test]
fn trailing_hidden_siblings_never_receive_layout() {
    let tree = Tree::new()
        .child("Foo")
        .child("Bar")
        .child(Leaf::new("gone").hide(true))
        .child(Tree::root("also gone").child("child").hide(true));
    assert_eq!(tree.render(), "├── Foo\n└── Bar");
}

#[test]
fn hidden_siblings_keep_numbering_contiguous() {
    let tree = Tree::new()
        .enumerator(arabic)
        .child("a")
        .child(Leaf::new("x").hide(true))
        .child("b");
    assert_eq!(tree.render(), "1. a\n2. b");

    let tree = Tree::new()
        .enumerator(arabic)
        .child(Leaf::new("x").hide(true))
        .child("a")
        .child("b");
    assert_eq!(tree.render(), "1. a\n2. b");
}

// =============================================================================
// Multi-line values
// =============================================================================

#[test]
fn multiline_values_stay_inside_their_marker_column() {
    let tree = Tree::root("Multiline\nRoot\nNode")
        .child("Foo")
        .child(
            Tree::root("Bar")
                .child("Qux\nLine 2\nLine 3\nLine 4")
                .child(Tree::root("Quux").child("Foo").child("Bar"))
                .child("Quuux"),
        )
        .child("Baz\nLine 2");

    let expected = "\
Multiline
Root
Node
├── Foo
├── Bar
│   ├── Qux
│   │   Line 2
│   │   Line 3
│   │   Line 4
│   ├── Quux
│   │   ├── Foo
│   │   └── Bar
│   └── Quuux
└── Baz
    Line 2";
    assert_eq!(tree.render(), expected);
}

// =============================================================================
// Custom enumerators, indenters, and per-subtree overrides
// =============================================================================

#[test]
fn rounded_corner_on_the_last_sibling() {
    let tree = Tree::root("root")
        .child("Foo")
        .child("Bar")
        .enumerator(rounded_enumerator);
    assert_eq!(tree.render(), "root\n├── Foo\n╰── Bar");
}

#[test]
fn custom_markers_apply_to_every_level() {
    fn arrow(_: &dyn Children, _: usize) -> String {
        "->".to_string()
    }

    let tree = Tree::new()
        .child("Foo")
        .child(Tree::root("Bar").child("Baz"))
        .enumerator(arrow)
        .indenter(arrow);

    let expected = "\
-> Foo
-> Bar
-> -> Baz";
    assert_eq!(tree.render(), expected);
}

#[test]
fn subtree_renderer_override_is_scoped() {
    let tree = Tree::new().child("a").child(
        Tree::root("b")
            .enumerator(rounded_enumerator)
            .child("x")
            .child("y"),
    );

    // The override governs b's children; b's own marker still comes from
    // the parent renderer.
    let expected = "\
├── a
└── b
    ├── x
    ╰── y";
    assert_eq!(tree.render(), expected);
}

// =============================================================================
// Marker alignment
// =============================================================================

#[test]
fn uneven_markers_right_align_within_a_level() {
    let list = List::new()
        .enumerator(roman)
        .items(["Foo", "Bar", "Baz", "Qux"]);

    let expected = "  I. Foo
 II. Bar
III. Baz
 IV. Qux";
    assert_eq!(list.render(), expected);
}

#[test]
fn one_hundred_roman_markers_share_one_column() {
    let list = List::new().enumerator(roman).items(vec!["Foo"; 100]);
    let rendered = list.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 100);

    // Widest marker in 1..=100 is LXXXVIII. (nine columns) plus the gap.
    for line in &lines {
        assert_eq!(display_width(line), 13, "misaligned line: {line:?}");
        assert!(line.ends_with(" Foo"));
    }
    assert_eq!(lines[87], "LXXXVIII. Foo");
    assert_eq!(lines[99], "       C. Foo");
}

#[test]
fn alignment_ignores_ansi_escape_codes() {
    let list = List::new()
        .enumerator(roman)
        .enumerator_style(Style::new().red().force_styling(true))
        .items(["Foo", "Bar", "Baz"]);

    let rendered = list.render();
    assert!(rendered.contains("\x1b["));
    for line in rendered.lines() {
        assert_eq!(display_width(line), 8, "misaligned line: {line:?}");
    }
}

// =============================================================================
// Builder merge policy
// =============================================================================

#[test]
fn nameless_subtree_merge_is_equivalent_to_explicit_nesting() {
    let explicit = Tree::root("foo").child(Tree::root("bar").child("zaz"));
    let flat = Tree::root("foo")
        .child("bar")
        .child(Tree::new().child("zaz"));
    assert_eq!(explicit.render(), flat.render());
}

#[test]
fn lists_nest_through_the_same_merge_policy() {
    let list = List::new()
        .item("Bananas")
        .item("Milk")
        .item(List::new().enumerator(arabic).item("Oat").item("Almond"))
        .item("Eggs");

    let expected = "\
• Bananas
• Milk
  1. Oat
  2. Almond
• Eggs";
    assert_eq!(list.render(), expected);
}

#[test]
fn nested_tree_without_override_inherits_the_list_renderer() {
    let list = List::new()
        .item("documents")
        .item(Tree::new().child("report.pdf").child("draft.md"));

    let expected = "\
• documents
  • report.pdf
  • draft.md";
    assert_eq!(list.render(), expected);
}

#[test]
fn nested_tree_with_override_keeps_its_markers() {
    let list = List::new().item("documents").item(
        Tree::new()
            .enumerator(arbor::default_enumerator)
            .indenter(arbor::default_indenter)
            .child("report.pdf")
            .child("draft.md"),
    );

    let expected = "\
• documents
  ├── report.pdf
  └── draft.md";
    assert_eq!(list.render(), expected);
}
