//! Terminal cell measurement.
//!
//! Widths are measured per grapheme cluster so that combining sequences and
//! emoji with modifiers are never split.

use unicode_display_width::width as display_width_impl;
use unicode_segmentation::UnicodeSegmentation;

/// Number of terminal cells `text` occupies.
pub fn cell_len(text: &str) -> usize {
    display_width_impl(text) as usize
}

pub fn grapheme_indices(text: &str) -> impl Iterator<Item = (usize, &str)> {
    UnicodeSegmentation::grapheme_indices(text, true)
}

/// Byte offset at which the first `cells` cells of `text` end.
///
/// A wide grapheme that would straddle the boundary is left out, so the
/// prefix may be one cell short.
pub fn byte_offset_for_cells(text: &str, cells: usize) -> usize {
    let mut used = 0;
    for (index, grapheme) in grapheme_indices(text) {
        let width = cell_len(grapheme);
        if used + width > cells {
            return index;
        }
        used += width;
    }
    text.len()
}

/// Break `text` into pieces no wider than `width` cells.
///
/// A grapheme wider than `width` gets a piece of its own.
pub fn chop_cells(text: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (index, grapheme) in grapheme_indices(text) {
        let cells = cell_len(grapheme);
        if used + cells > width && index > start {
            pieces.push(&text[start..index]);
            start = index;
            used = 0;
        }
        used += cells;
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}
