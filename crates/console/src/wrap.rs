//! Line splitting, word wrapping and justification.

use once_cell::sync::Lazy;
use regex::Regex;
use rich::Segment;
use rich::cells::{cell_len, chop_cells};

use crate::options::{Justify, Overflow, RenderOptions};
use crate::strip::Strip;

static WORDS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\s*\S+\s*").ok());

/// Cell positions at which `text` should break to fit `width`.
///
/// Words break at their leading edge; trailing whitespace may hang past
/// the width. A word wider than `width` is chopped across lines when `fold`
/// is set and otherwise gets a line of its own.
pub fn divide_line(text: &str, width: usize, fold: bool) -> Vec<usize> {
    let Some(words) = WORDS.as_ref() else {
        return Vec::new();
    };

    let mut cuts = Vec::new();
    let mut line_position = 0;
    let mut scanned_bytes = 0;
    let mut scanned_cells = 0;

    for word in words.find_iter(text) {
        scanned_cells += cell_len(&text[scanned_bytes..word.start()]);
        scanned_bytes = word.start();
        let mut start = scanned_cells;

        let word_text = word.as_str();
        let word_length = cell_len(word_text.trim_end());
        let full_length = cell_len(word_text);

        if line_position + word_length > width {
            if word_length > width {
                if fold {
                    let pieces = chop_cells(word_text, width);
                    let last = pieces.len().saturating_sub(1);
                    for (index, piece) in pieces.into_iter().enumerate() {
                        if start > 0 {
                            cuts.push(start);
                        }
                        if index == last {
                            line_position = cell_len(piece);
                        } else {
                            start += cell_len(piece);
                        }
                    }
                } else {
                    if start > 0 {
                        cuts.push(start);
                    }
                    line_position = full_length;
                }
            } else if line_position > 0 && start > 0 {
                cuts.push(start);
                line_position = full_length;
            } else {
                line_position += full_length;
            }
        } else {
            line_position += full_length;
        }

        scanned_cells += full_length;
        scanned_bytes = word.end();
    }

    cuts.dedup();
    cuts
}

/// Splits a segment stream into lines at `\n`.
///
/// Newlines are consumed. There is always at least one line; input ending
/// in `\n` ends with an empty one.
pub fn split_lines(segments: impl IntoIterator<Item = Segment>) -> Vec<Strip> {
    let mut lines = Vec::new();
    let mut current: Vec<Segment> = Vec::new();

    for segment in segments {
        if segment.is_control() || !segment.text().contains('\n') {
            current.push(segment);
            continue;
        }
        let mut parts = segment.text().split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                current.push(segment.with_text(part));
            }
            if parts.peek().is_some() {
                lines.push(Strip::from_segments(std::mem::take(&mut current)));
            }
        }
    }

    lines.push(Strip::from_segments(current));
    lines
}

/// Lays a segment stream out as lines fitting `options`.
///
/// Only lines wider than `max_width` are wrapped. Wrapped lines lose their
/// trailing spaces. Justification then pads every line to `max_width`,
/// except under [`Justify::Default`] which leaves lines as they are.
pub fn layout(segments: impl IntoIterator<Item = Segment>, options: &RenderOptions) -> Vec<Strip> {
    let width = options.max_width();
    let mut output = Vec::new();

    for line in split_lines(segments) {
        let mut wrapped = if line.cell_length() > width {
            let fold = options.overflow == Overflow::Fold;
            let cuts = divide_line(&line.text(), width, fold);
            line.divide(&cuts)
                .into_iter()
                .map(|piece| {
                    piece
                        .rstrip()
                        .truncate(width, options.overflow == Overflow::Ellipsis)
                })
                .collect()
        } else {
            vec![line]
        };

        match options.justify {
            Justify::Default => {}
            Justify::Full => {
                let last = wrapped.len().saturating_sub(1);
                for (index, piece) in wrapped.iter_mut().enumerate() {
                    *piece = if index == last {
                        piece.text_align(Justify::Left, width, None)
                    } else {
                        piece.justify(width, None)
                    };
                }
            }
            align => {
                for piece in wrapped.iter_mut() {
                    *piece = piece.text_align(align, width, None);
                }
            }
        }

        output.extend(wrapped);
    }

    output
}
