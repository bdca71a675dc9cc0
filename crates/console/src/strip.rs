//! Strip: a horizontal line of Segments.
//!
//! Strips are the intermediate form between the flat segment stream a
//! render produces and the lines the console writes. Wrapping, cropping and
//! justification all work on strips.
//!
//! Control segments occupy no cells. They stay at their cell position
//! through every operation here; a crop keeps the controls that sit on
//! either edge of the cropped range.

use rich::cells::{cell_len, grapheme_indices};
use rich::{Segment, Style};
use smallvec::{SmallVec, smallvec};

use crate::options::Justify;

/// Inline storage for 2 segments covers most lines: plain text, or a
/// styled run plus padding.
pub type SegmentVec = SmallVec<[Segment; 2]>;

const ELLIPSIS: &str = "…";

/// A horizontal line of segments with a cached cell length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Strip {
    segments: SegmentVec,
    cell_length: usize,
}

impl Strip {
    /// Creates an empty strip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a strip from a Vec of segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self::from_smallvec(SegmentVec::from_vec(segments))
    }

    fn from_smallvec(segments: SegmentVec) -> Self {
        let cell_length = segments.iter().map(Segment::cell_length).sum();
        Self {
            segments,
            cell_length,
        }
    }

    pub fn from_segment(segment: Segment) -> Self {
        let cell_length = segment.cell_length();
        Self {
            segments: smallvec![segment],
            cell_length,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn cell_length(&self) -> usize {
        self.cell_length
    }

    /// True when the strip holds no segments at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The visible text, without control sequences.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| !s.is_control())
            .map(Segment::text)
            .collect()
    }

    /// Cells `[start, end)` of the strip.
    pub fn crop(&self, start: usize, end: usize) -> Strip {
        self.crop_inner(start, end, true)
    }

    /// `keep_trailing` decides whether controls at exactly `end` belong to
    /// this piece.
    fn crop_inner(&self, start: usize, end: usize, keep_trailing: bool) -> Strip {
        let end = end.min(self.cell_length);
        let mut result = SegmentVec::new();
        let mut pos = 0;

        for segment in &self.segments {
            if segment.is_control() {
                if pos >= start && (pos < end || (keep_trailing && pos == end)) {
                    result.push(segment.clone());
                }
                continue;
            }

            let len = segment.cell_length();
            let seg_end = pos + len;
            if seg_end <= start || pos >= end {
                pos = seg_end;
                continue;
            }

            let local_start = start.saturating_sub(pos);
            let local_end = (end - pos).min(len);
            if local_start == 0 && local_end == len {
                result.push(segment.clone());
            } else {
                let (_, rest) = segment.split_at(local_start);
                let taken = rest.cell_length().min(local_end - local_start);
                let (middle, _) = rest.split_at(taken);
                if !middle.is_empty() {
                    result.push(middle);
                }
            }
            pos = seg_end;
        }

        Strip::from_smallvec(result)
    }

    /// Splits the strip at the given cell positions.
    ///
    /// Cuts must be ascending; cuts outside the strip are ignored.
    pub fn divide(&self, cuts: &[usize]) -> Vec<Strip> {
        let mut bounds = Vec::with_capacity(cuts.len() + 1);
        let mut last = 0;
        for &cut in cuts {
            if cut > last && cut <= self.cell_length {
                bounds.push((last, cut));
                last = cut;
            }
        }
        if last < self.cell_length {
            bounds.push((last, self.cell_length));
        }
        if bounds.is_empty() {
            return vec![self.clone()];
        }

        let final_index = bounds.len() - 1;
        bounds
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| self.crop_inner(start, end, index == final_index))
            .collect()
    }

    /// Merges adjacent text segments with identical styles.
    pub fn simplify(&self) -> Strip {
        let mut result: SegmentVec = SegmentVec::new();
        for segment in &self.segments {
            if segment.is_empty() {
                continue;
            }
            match result.last_mut() {
                Some(previous)
                    if !previous.is_control()
                        && !segment.is_control()
                        && previous.style() == segment.style() =>
                {
                    let merged = format!("{}{}", previous.text(), segment.text());
                    *previous = previous.with_text(merged);
                }
                _ => result.push(segment.clone()),
            }
        }
        Strip::from_smallvec(result)
    }

    /// Removes trailing spaces, looking past trailing controls.
    pub fn rstrip(&self) -> Strip {
        let mut segments = self.segments.clone();
        let mut index = segments.len();
        while index > 0 {
            index -= 1;
            if segments[index].is_control() {
                continue;
            }
            let trimmed = segments[index].text().trim_end_matches(' ').to_string();
            if trimmed.is_empty() {
                segments.remove(index);
                continue;
            }
            segments[index] = segments[index].with_text(trimmed);
            break;
        }
        Strip::from_smallvec(segments)
    }

    /// Cuts the strip to `width` cells, marking the cut with `…` when
    /// `ellipsis` is set.
    ///
    /// A leading grapheme wider than `width` is kept whole rather than
    /// cropped to nothing.
    pub fn truncate(&self, width: usize, ellipsis: bool) -> Strip {
        if self.cell_length <= width {
            return self.clone();
        }
        let overwide = self
            .first_grapheme_width()
            .filter(|&cells| width > 0 && cells > width);
        if let Some(cells) = overwide {
            return self.crop(0, cells);
        }
        if !ellipsis || width == 0 {
            return self.crop(0, width);
        }
        let mut cropped = self.crop(0, width - 1);
        let style = cropped
            .segments
            .iter()
            .rev()
            .find(|s| !s.is_control())
            .and_then(|s| s.style().cloned());
        let marker = match style {
            Some(style) => Segment::styled(ELLIPSIS, style),
            None => Segment::new(ELLIPSIS),
        };
        cropped.cell_length += marker.cell_length();
        cropped.segments.push(marker);
        cropped
    }

    fn first_grapheme_width(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter(|s| !s.is_control())
            .find_map(|s| grapheme_indices(s.text()).next())
            .map(|(_, grapheme)| cell_len(grapheme))
    }

    /// Aligns the line within `width` cells.
    ///
    /// [`Justify::Default`] leaves the line untouched and [`Justify::Full`]
    /// behaves like left alignment; see [`Strip::justify`] for the
    /// stretching form.
    pub fn text_align(&self, align: Justify, width: usize, pad_style: Option<Style>) -> Strip {
        if align == Justify::Default {
            return self.clone();
        }
        if self.cell_length >= width {
            return self.truncate(width, false);
        }

        let gap = width - self.cell_length;
        let (left_pad, right_pad) = match align {
            Justify::Right => (gap, 0),
            Justify::Center => (gap / 2, gap - gap / 2),
            Justify::Left | Justify::Full | Justify::Default => (0, gap),
        };

        let mut segments = SegmentVec::new();
        if left_pad > 0 {
            segments.push(Segment::blank(left_pad, pad_style.clone()));
        }
        segments.extend(self.segments.iter().cloned());
        if right_pad > 0 {
            segments.push(Segment::blank(right_pad, pad_style));
        }
        Strip::from_smallvec(segments)
    }

    /// Fully justifies text to fill the given width.
    ///
    /// Extra spaces go to the gaps between words, rightmost gaps first.
    pub fn justify(&self, width: usize, pad_style: Option<Style>) -> Strip {
        if self.cell_length >= width {
            return self.truncate(width, false);
        }

        let gap_count: usize = self
            .segments
            .iter()
            .filter(|seg| !seg.is_control())
            .map(|seg| seg.text().chars().filter(|ch| *ch == ' ').count())
            .sum();
        if gap_count == 0 {
            return self.text_align(Justify::Left, width, pad_style);
        }

        let extra = width - self.cell_length;
        let mut extra_per_gap = vec![0usize; gap_count];
        for i in 0..extra {
            let idx = gap_count - 1 - (i % gap_count);
            extra_per_gap[idx] += 1;
        }

        let mut gap_index = 0;
        let mut segments = SegmentVec::new();
        for seg in &self.segments {
            if seg.is_control() {
                segments.push(seg.clone());
                continue;
            }
            let mut buffer = String::new();
            for ch in seg.text().chars() {
                if ch == ' ' {
                    if !buffer.is_empty() {
                        segments.push(seg.with_text(std::mem::take(&mut buffer)));
                    }
                    let extra_spaces = extra_per_gap.get(gap_index).copied().unwrap_or(0);
                    gap_index += 1;
                    segments.push(seg.with_text(" ".repeat(1 + extra_spaces)));
                } else {
                    buffer.push(ch);
                }
            }
            if !buffer.is_empty() {
                segments.push(seg.with_text(buffer));
            }
        }

        Strip::from_smallvec(segments)
    }
}

impl FromIterator<Segment> for Strip {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Strip::from_smallvec(iter.into_iter().collect())
    }
}
