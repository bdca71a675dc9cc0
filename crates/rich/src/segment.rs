//! Segment: the atomic unit of rendered output.
//!
//! A Segment is either a run of text with an optional [`Style`], or a raw
//! control sequence that takes no space on screen. Everything a console
//! prints is flattened into segments before it is encoded.

use crate::cells::{byte_offset_for_cells, cell_len};
use crate::style::Style;

/// Terminal control sequences that can travel through the segment stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    ShowCursor,
    HideCursor,
    Bell,
    /// Move the cursor to the top-left corner.
    Home,
    /// Clear the screen.
    Clear,
    EnableAltScreen,
    DisableAltScreen,
}

impl Control {
    /// The escape sequence for this control.
    pub fn sequence(self) -> &'static str {
        match self {
            Control::ShowCursor => "\x1b[?25h",
            Control::HideCursor => "\x1b[?25l",
            Control::Bell => "\x07",
            Control::Home => "\x1b[H",
            Control::Clear => "\x1b[2J",
            Control::EnableAltScreen => "\x1b[?1049h",
            Control::DisableAltScreen => "\x1b[?1049l",
        }
    }
}

/// A styled text chunk, or a control sequence.
///
/// # Examples
///
/// ```
/// use rich::{Segment, Style};
///
/// let seg = Segment::new("Hello");
/// assert_eq!(seg.cell_length(), 5);
///
/// let styled = Segment::styled("World", Style::parse("bold").unwrap());
/// assert!(styled.style().is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    text: String,
    style: Option<Style>,
    control: bool,
}

impl Segment {
    /// Creates a new segment with the given text and no style.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            style: None,
            control: false,
        }
    }

    /// Creates a new segment with the given text and style.
    pub fn styled<S: Into<String>>(text: S, style: Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
            control: false,
        }
    }

    /// A control segment carrying `control`'s escape sequence.
    pub fn control(control: Control) -> Self {
        Self::raw_control(control.sequence())
    }

    /// A control segment with an arbitrary escape sequence.
    pub fn raw_control<S: Into<String>>(sequence: S) -> Self {
        Self {
            text: sequence.into(),
            style: None,
            control: true,
        }
    }

    /// A newline segment.
    pub fn line() -> Self {
        Self::new("\n")
    }

    /// Creates a blank segment of spaces with the given width and style.
    pub fn blank(width: usize, style: Option<Style>) -> Self {
        Self {
            text: " ".repeat(width),
            style,
            control: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    pub fn is_control(&self) -> bool {
        self.control
    }

    /// Terminal cells this segment occupies; control segments take none.
    pub fn cell_length(&self) -> usize {
        if self.control {
            0
        } else {
            cell_len(&self.text)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Splits the segment at a cell position.
    ///
    /// A wide grapheme straddling `cut` goes to the right half. Control
    /// segments are never split.
    pub fn split_at(&self, cut: usize) -> (Segment, Segment) {
        if self.control {
            return (self.clone(), self.with_text(""));
        }
        let index = byte_offset_for_cells(&self.text, cut);
        let (left, right) = self.text.split_at(index);
        (self.with_text(left), self.with_text(right))
    }

    /// Layers `style` over this segment's style.
    ///
    /// Control segments come back unchanged.
    pub fn apply_style(&self, style: &Style) -> Segment {
        if self.control || style.is_null() {
            return self.clone();
        }
        let combined = match &self.style {
            Some(current) => current.combine(style),
            None => style.clone(),
        };
        Segment {
            text: self.text.clone(),
            style: Some(combined),
            control: false,
        }
    }

    /// Same style and kind, different text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Segment {
        Segment {
            text: text.into(),
            style: self.style.clone(),
            control: self.control,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::style::Attributes;

    #[test]
    fn segment_new_creates_unstyled() {
        let seg = Segment::new("hello");
        assert_eq!(seg.text(), "hello");
        assert!(seg.style().is_none());
        assert!(!seg.is_control());
    }

    #[test]
    fn segment_cell_length_wide_chars() {
        assert_eq!(Segment::new("日本").cell_length(), 4);
        assert_eq!(Segment::new("a日b").cell_length(), 4);
    }

    #[test]
    fn control_has_no_width() {
        let seg = Segment::control(Control::HideCursor);
        assert_eq!(seg.text(), "\x1b[?25l");
        assert_eq!(seg.cell_length(), 0);
        assert!(seg.is_control());
    }

    #[test]
    fn split_at_middle() {
        let (left, right) = Segment::new("Hello").split_at(2);
        assert_eq!(left.text(), "He");
        assert_eq!(right.text(), "llo");
    }

    #[test]
    fn split_at_bounds() {
        let (left, right) = Segment::new("Hello").split_at(0);
        assert_eq!((left.text(), right.text()), ("", "Hello"));
        let (left, right) = Segment::new("Hello").split_at(10);
        assert_eq!((left.text(), right.text()), ("Hello", ""));
    }

    #[test]
    fn split_wide_char_goes_right() {
        let (left, right) = Segment::new("日本").split_at(1);
        assert_eq!(left.text(), "");
        assert_eq!(right.text(), "日本");
    }

    #[test]
    fn split_preserves_style() {
        let style = Style::from_attributes(Attributes::BOLD);
        let (left, right) = Segment::styled("Hello", style.clone()).split_at(2);
        assert_eq!(left.style(), Some(&style));
        assert_eq!(right.style(), Some(&style));
    }

    #[test]
    fn apply_style_overlays() {
        let seg = Segment::styled("hi", Style::new().with_fg(Color::Standard(1)));
        let result = seg.apply_style(&Style::new().with_fg(Color::Standard(2)));
        assert_eq!(result.style().unwrap().fg, Some(Color::Standard(2)));
    }

    #[test]
    fn apply_style_skips_control() {
        let seg = Segment::control(Control::Bell);
        let result = seg.apply_style(&Style::from_attributes(Attributes::BOLD));
        assert!(result.style().is_none());
    }

    #[test]
    fn blank_creates_spaces() {
        let seg = Segment::blank(3, None);
        assert_eq!(seg.text(), "   ");
        assert_eq!(seg.cell_length(), 3);
    }
}
