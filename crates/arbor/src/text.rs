//! ANSI-aware text measurement and padding helpers.
//!
//! All helpers preserve ANSI escape codes in their output while excluding
//! them from width calculations, and handle Unicode correctly (CJK
//! characters count as two columns).

use console::measure_text_width;

/// Returns the display width of a string in terminal columns, ignoring ANSI
/// escape codes.
///
/// ```rust
/// use arbor::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Left-pads `s` with spaces up to `width` display columns. Strings already
/// at least `width` wide are returned unchanged.
pub(crate) fn pad_left(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(s));
    if gap == 0 {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(gap), s)
}

/// Right-pads `s` with spaces up to `width` display columns.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(s));
    if gap == 0 {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(gap))
}
