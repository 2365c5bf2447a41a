//! The enumerator/indenter protocol and the built-in marker library.
//!
//! An [`Enumerator`] maps `(siblings, index)` to the marker text placed
//! before a node; an [`Indenter`] maps the same pair to the text prepended to
//! every descendant line of that node. Both are plain function pointers: the
//! protocol is pure and stateless, and the renderer may call either any
//! number of times for the same node.
//!
//! Tree-shaped markers ([`default_enumerator`], [`rounded_enumerator`],
//! [`default_indenter`]) distinguish the last sibling so the vertical rule
//! terminates correctly. The renderer lays levels out over visible siblings
//! only, so "last" here always means the last visible sibling.
//!
//! List-shaped markers ([`arabic`], [`alphabet`], [`roman`], [`bullet`],
//! [`asterisk`], [`dash`]) enumerate by index alone.

use crate::node::Children;

/// Produces the marker text placed before the node at `index`.
pub type Enumerator = fn(&dyn Children, usize) -> String;

/// Produces the text prepended to every descendant line of the node at
/// `index`.
pub type Indenter = fn(&dyn Children, usize) -> String;

/// Classic tree branches: `├──` for every sibling but the last, `└──` for
/// the last.
pub fn default_enumerator(children: &dyn Children, index: usize) -> String {
    if index + 1 == children.len() {
        "└──".to_string()
    } else {
        "├──".to_string()
    }
}

/// Tree branches with a rounded corner on the last sibling: `├──` / `╰──`.
pub fn rounded_enumerator(children: &dyn Children, index: usize) -> String {
    if index + 1 == children.len() {
        "╰──".to_string()
    } else {
        "├──".to_string()
    }
}

/// Continues the vertical rule under every sibling but the last: `│  ` /
/// three spaces.
pub fn default_indenter(children: &dyn Children, index: usize) -> String {
    if index + 1 == children.len() {
        "   ".to_string()
    } else {
        "│  ".to_string()
    }
}

/// Arabic numerals: `1.`, `2.`, `3.` ...
pub fn arabic(_children: &dyn Children, index: usize) -> String {
    format!("{}.", index + 1)
}

/// Spreadsheet-style column letters: `A.` ... `Z.`, `AA.` ... `ZZ.`,
/// `AAA.` ...
pub fn alphabet(_children: &dyn Children, index: usize) -> String {
    const ABC_LEN: i64 = 26;

    fn letter(ordinal: i64) -> char {
        (b'A' as i64 + ordinal) as u8 as char
    }

    let i = index as i64;
    if i >= ABC_LEN * ABC_LEN + ABC_LEN {
        return format!(
            "{}{}{}.",
            letter(i / ABC_LEN / ABC_LEN - 1),
            letter(i / ABC_LEN % ABC_LEN - 1),
            letter(i % ABC_LEN),
        );
    }
    if i >= ABC_LEN {
        return format!("{}{}.", letter(i / ABC_LEN - 1), letter(i % ABC_LEN));
    }
    format!("{}.", letter(i))
}

/// Roman numerals: `I.`, `II.`, `III.` ... built with the classic
/// subtractive algorithm over the 1-indexed position.
pub fn roman(_children: &dyn Children, index: usize) -> String {
    const PAIRS: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut remaining = index + 1;
    let mut result = String::new();
    for (value, symbol) in PAIRS {
        while remaining >= value {
            result.push_str(symbol);
            remaining -= value;
        }
    }
    result.push('.');
    result
}

/// A bullet point: `•`.
pub fn bullet(_children: &dyn Children, _index: usize) -> String {
    "•".to_string()
}

/// An asterisk: `*`.
pub fn asterisk(_children: &dyn Children, _index: usize) -> String {
    "*".to_string()
}

/// A dash: `-`.
pub fn dash(_children: &dyn Children, _index: usize) -> String {
    "-".to_string()
}
