//! Styled text: a plain string with styled spans over it.

use crate::cells::cell_len;
use crate::error::RichError;
use crate::parser;
use crate::segment::Segment;
use crate::span::Span;
use crate::style::Style;
use crate::theme::Theme;

/// A plain string, a base style, and styled byte ranges on top.
///
/// Spans are applied in order over the base style, so a later span wins
/// where it overlaps an earlier one.
///
/// # Examples
///
/// ```
/// use rich::{Text, Theme};
///
/// let text = Text::from_markup("[bold]Hello[/] World", &Theme::default()).unwrap();
/// assert_eq!(text.plain(), "Hello World");
/// assert_eq!(text.spans().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    plain: String,
    spans: Vec<Span>,
    style: Style,
}

impl Text {
    pub fn new(plain: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            spans: Vec::new(),
            style: Style::null(),
        }
    }

    /// Text whose every character has `style`.
    pub fn styled(plain: impl Into<String>, style: Style) -> Self {
        Self {
            plain: plain.into(),
            spans: Vec::new(),
            style,
        }
    }

    /// Parse markup, resolving style names against `theme`.
    pub fn from_markup(markup: &str, theme: &Theme) -> Result<Self, RichError> {
        Ok(Self::assemble(parser::parse(markup, theme)?))
    }

    /// Concatenate `(text, style)` pairs.
    pub fn assemble(parts: impl IntoIterator<Item = (String, Style)>) -> Self {
        let mut text = Text::default();
        for (plain, style) in parts {
            text.append(&plain, style);
        }
        text
    }

    /// Append `plain`, styling it with `style` unless that is null.
    pub fn append(&mut self, plain: &str, style: Style) {
        let start = self.plain.len();
        self.plain.push_str(plain);
        if !style.is_null() && !plain.is_empty() {
            self.spans.push(Span::new(start, self.plain.len(), style));
        }
    }

    /// Append another text, keeping its spans.
    pub fn append_text(&mut self, other: &Text) {
        let offset = self.plain.len();
        self.plain.push_str(&other.plain);
        if !other.style.is_null() && !other.plain.is_empty() {
            self.spans
                .push(Span::new(offset, self.plain.len(), other.style.clone()));
        }
        self.spans
            .extend(other.spans.iter().map(|span| span.shifted(offset)));
    }

    /// Style a byte range over every existing span.
    pub fn stylize(&mut self, style: Style, start: usize, end: usize) {
        if let Some(span) = self.clamped_span(style, start, end) {
            self.spans.push(span);
        }
    }

    /// Style a byte range beneath every existing span.
    pub fn stylize_before(&mut self, style: Style, start: usize, end: usize) {
        if let Some(span) = self.clamped_span(style, start, end) {
            self.spans.insert(0, span);
        }
    }

    /// Insert `spans` beneath every existing span, keeping their order.
    pub fn prepend_spans(&mut self, spans: impl IntoIterator<Item = Span>) {
        let spans: Vec<Span> = spans
            .into_iter()
            .filter_map(|span| self.clamped_span(span.style, span.start, span.end))
            .collect();
        self.spans.splice(0..0, spans);
    }

    /// Clamps a byte range to the text, widening it to whole characters.
    fn clamped_span(&self, style: Style, start: usize, end: usize) -> Option<Span> {
        let start = floor_char_boundary(&self.plain, start);
        let end = ceil_char_boundary(&self.plain, end);
        (start < end && !style.is_null()).then(|| Span::new(start, end, style))
    }

    pub fn plain(&self) -> &str {
        &self.plain
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn len(&self) -> usize {
        self.plain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty()
    }

    pub fn cell_len(&self) -> usize {
        cell_len(&self.plain)
    }

    /// The combined style at a byte offset.
    pub fn style_at(&self, offset: usize) -> Style {
        self.spans
            .iter()
            .filter(|span| span.contains(offset))
            .fold(self.style.clone(), |acc, span| acc.combine(&span.style))
    }

    /// Iterate over maximal runs of uniformly styled text.
    pub fn segments(&self) -> SegmentIterator<'_> {
        SegmentIterator { text: self, pos: 0 }
    }

    /// The text as segments; unstyled runs get no style.
    pub fn render(&self) -> Vec<Segment> {
        self.segments()
            .map(|(plain, style)| {
                if style.is_null() {
                    Segment::new(plain)
                } else {
                    Segment::styled(plain, style)
                }
            })
            .collect()
    }
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

impl From<&str> for Text {
    fn from(plain: &str) -> Self {
        Text::new(plain)
    }
}

impl From<String> for Text {
    fn from(plain: String) -> Self {
        Text::new(plain)
    }
}

/// Iterator over styled runs of a [`Text`].
pub struct SegmentIterator<'a> {
    text: &'a Text,
    pos: usize,
}

impl<'a> Iterator for SegmentIterator<'a> {
    type Item = (&'a str, Style);

    fn next(&mut self) -> Option<Self::Item> {
        let plain = &self.text.plain;
        if self.pos >= plain.len() {
            return None;
        }

        let mut end = plain.len();
        for span in &self.text.spans {
            if span.start > self.pos && span.start < end {
                end = span.start;
            }
            if span.end > self.pos && span.end < end {
                end = span.end;
            }
        }

        let style = self.text.style_at(self.pos);
        let run = &plain[self.pos..end];
        self.pos = end;
        Some((run, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::style::Attributes;

    #[test]
    fn plain_text_renders_unstyled() {
        let segments = Text::new("Hello").render();
        assert_eq!(segments, vec![Segment::new("Hello")]);
    }

    #[test]
    fn segments_split_at_span_edges() {
        let mut text = Text::new("Hello World");
        text.stylize(Style::from_attributes(Attributes::BOLD), 0, 5);
        let runs: Vec<_> = text.segments().collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].0, "Hello");
        assert!(runs[0].1.has(Attributes::BOLD));
        assert_eq!(runs[1].0, " World");
        assert!(runs[1].1.is_null());
    }

    #[test]
    fn later_spans_win() {
        let mut text = Text::new("abc");
        text.stylize(Style::new().with_fg(Color::Standard(1)), 0, 3);
        text.stylize(Style::new().with_fg(Color::Standard(2)), 1, 2);
        text.stylize_before(Style::new().with_fg(Color::Standard(3)), 0, 3);
        assert_eq!(text.style_at(0).fg, Some(Color::Standard(1)));
        assert_eq!(text.style_at(1).fg, Some(Color::Standard(2)));
    }

    #[test]
    fn base_style_applies_everywhere() {
        let text = Text::styled("ab", Style::from_attributes(Attributes::ITALIC));
        let segments = text.render();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].style().unwrap().has(Attributes::ITALIC));
    }

    #[test]
    fn stylize_clamps_range() {
        let mut text = Text::new("ab");
        text.stylize(Style::from_attributes(Attributes::BOLD), 1, 99);
        text.stylize(Style::from_attributes(Attributes::BOLD), 5, 9);
        assert_eq!(text.spans(), &[Span::new(1, 2, Style::from_attributes(Attributes::BOLD))]);
    }

    #[test]
    fn offsets_inside_a_character_cover_the_whole_character() {
        let bold = Style::from_attributes(Attributes::BOLD);
        let mut text = Text::new("é!");
        text.stylize(bold.clone(), 1, 3);
        assert_eq!(text.spans(), &[Span::new(0, 3, bold.clone())]);
        assert_eq!(text.render(), vec![Segment::styled("é!", bold.clone())]);

        let mut text = Text::new("aé");
        text.prepend_spans([Span::new(0, 2, bold.clone())]);
        assert_eq!(text.spans(), &[Span::new(0, 3, bold)]);
        assert_eq!(text.render().len(), 1);
    }

    #[test]
    fn append_text_shifts_spans() {
        let mut first = Text::new("ab");
        let mut second = Text::new("cd");
        second.stylize(Style::from_attributes(Attributes::BOLD), 0, 1);
        first.append_text(&second);
        assert_eq!(first.plain(), "abcd");
        assert_eq!(first.spans()[0].start, 2);
        assert_eq!(first.spans()[0].end, 3);
    }
}
