//! The console engine.
//!
//! A [`Console`] turns [`Content`] into segments, lays them out to its
//! width, encodes them as ANSI escape sequences for its color system and
//! writes the result to an [`Output`]. When recording, it also keeps the
//! rendered segments so they can be exported later.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use log::{debug, trace};
use rich::{ColorSystem, Control, Highlighter, ReprHighlighter, Segment, Style, Text, Theme};

use crate::error::{ConsoleError, Result};
use crate::export::{self, HtmlOptions};
use crate::options::{Justify, OptionsUpdate, Overflow, RenderOptions};
use crate::output::Output;
use crate::renderable::Content;
use crate::strip::Strip;
use crate::wrap;

const DEFAULT_WIDTH: usize = 80;
const DEFAULT_HEIGHT: usize = 25;

/// How a console picks its color system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorChoice {
    /// Ask the destination; a terminal that doesn't say gets
    /// [`ColorSystem::Standard`], anything else [`ColorSystem::NoColor`].
    #[default]
    Auto,
    System(ColorSystem),
}

impl ColorChoice {
    fn resolve(self, output: &dyn Output, is_terminal: bool) -> ColorSystem {
        match self {
            ColorChoice::System(system) => system,
            ColorChoice::Auto => output.color_system().unwrap_or(if is_terminal {
                ColorSystem::Standard
            } else {
                ColorSystem::NoColor
            }),
        }
    }
}

impl From<ColorSystem> for ColorChoice {
    fn from(system: ColorSystem) -> Self {
        ColorChoice::System(system)
    }
}

impl FromStr for ColorChoice {
    type Err = ConsoleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(ColorChoice::Auto);
        }
        s.parse::<ColorSystem>()
            .map(ColorChoice::System)
            .map_err(|_| ConsoleError::UnknownOption {
                kind: "color system",
                value: s.trim().to_string(),
            })
    }
}

/// Per-call overrides for [`Console::print_with`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Layered over everything the content renders to.
    pub style: Option<Style>,
    pub justify: Option<Justify>,
    pub overflow: Option<Overflow>,
    pub width: Option<usize>,
    pub markup: Option<bool>,
    pub highlight: Option<bool>,
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn markup(mut self, markup: bool) -> Self {
        self.markup = Some(markup);
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
        self
    }

    fn to_update(&self) -> OptionsUpdate {
        OptionsUpdate {
            width: self.width,
            justify: self.justify,
            overflow: self.overflow,
            markup: self.markup,
            highlight: self.highlight,
            ..OptionsUpdate::default()
        }
    }
}

/// Builder for [`Console`].
///
/// ```
/// use rich::ColorSystem;
/// use rich_console::{Console, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let mut console = Console::builder()
///     .color_system(ColorSystem::TrueColor)
///     .file(buffer.clone())
///     .width(40)
///     .build();
/// console.print("[bold]hi").unwrap();
/// assert_eq!(buffer.contents(), "\x1b[1mhi\x1b[0m\n");
/// ```
pub struct ConsoleBuilder {
    color_system: ColorChoice,
    file: Option<Box<dyn Output>>,
    width: Option<usize>,
    height: Option<usize>,
    record: bool,
    theme: Option<Theme>,
    markup: bool,
    highlight: bool,
    highlighter: Option<Box<dyn Highlighter>>,
    force_terminal: Option<bool>,
    encoding: String,
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self {
            color_system: ColorChoice::Auto,
            file: None,
            width: None,
            height: None,
            record: false,
            theme: None,
            markup: true,
            highlight: true,
            highlighter: None,
            force_terminal: None,
            encoding: "utf-8".to_string(),
        }
    }
}

impl ConsoleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a [`ColorChoice`] or a [`ColorSystem`].
    pub fn color_system(mut self, choice: impl Into<ColorChoice>) -> Self {
        self.color_system = choice.into();
        self
    }

    /// Where output goes; stdout when unset.
    pub fn file(mut self, file: impl Output + 'static) -> Self {
        self.file = Some(Box::new(file));
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// Keep every printed segment for export.
    pub fn record(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    /// Styles for names used in markup; the default theme when unset.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn markup(mut self, markup: bool) -> Self {
        self.markup = markup;
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Replaces the [`ReprHighlighter`].
    pub fn highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self
    }

    /// Treat the destination as a terminal, or as not one, regardless of
    /// what it reports.
    pub fn force_terminal(mut self, is_terminal: bool) -> Self {
        self.force_terminal = Some(is_terminal);
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn build(self) -> Console {
        let file: Box<dyn Output> = match self.file {
            Some(file) => file,
            None => Box::new(io::stdout()),
        };
        let is_terminal = self.force_terminal.unwrap_or_else(|| file.is_terminal());
        let color_system = self.color_system.resolve(file.as_ref(), is_terminal);

        let console = Console {
            file,
            color_system,
            is_terminal,
            width: self.width,
            height: self.height,
            record: self.record,
            history: Vec::new(),
            theme: self.theme.unwrap_or_default(),
            markup: self.markup,
            highlight: self.highlight,
            highlighter: self
                .highlighter
                .unwrap_or_else(|| Box::new(ReprHighlighter)),
            encoding: self.encoding,
        };
        debug!(
            "console created: size={:?} color_system={} terminal={} record={}",
            console.size(),
            console.color_system,
            console.is_terminal,
            console.record
        );
        console
    }
}

/// Renders content and writes it to a destination.
///
/// Writing and recording mutate the console, so a console shared between
/// threads needs an outer lock.
pub struct Console {
    file: Box<dyn Output>,
    color_system: ColorSystem,
    is_terminal: bool,
    width: Option<usize>,
    height: Option<usize>,
    record: bool,
    history: Vec<Segment>,
    theme: Theme,
    markup: bool,
    highlight: bool,
    highlighter: Box<dyn Highlighter>,
    encoding: String,
}

impl Default for Console {
    fn default() -> Self {
        Console::builder().build()
    }
}

impl Console {
    /// A console on stdout with every setting at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    pub fn color_system(&self) -> ColorSystem {
        self.color_system
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// `(width, height)`: the explicit overrides, else what the destination
    /// reports, else 80×25.
    pub fn size(&self) -> (usize, usize) {
        let reported = self.file.dimensions();
        let width = self
            .width
            .or(reported.map(|(columns, _)| columns as usize))
            .unwrap_or(DEFAULT_WIDTH);
        let height = self
            .height
            .or(reported.map(|(_, rows)| rows as usize))
            .unwrap_or(DEFAULT_HEIGHT);
        (width, height)
    }

    pub fn width(&self) -> usize {
        self.size().0
    }

    pub fn height(&self) -> usize {
        self.size().1
    }

    /// Default options for a render on this console.
    pub fn options(&self) -> RenderOptions {
        RenderOptions::new(1, self.width()).update(
            OptionsUpdate::new()
                .color_system(self.color_system)
                .is_terminal(self.is_terminal)
                .encoding(self.encoding.clone())
                .markup(self.markup)
                .highlight(self.highlight),
        )
    }

    /// Resolves a style name or inline definition.
    ///
    /// The definition is parsed first; only if that fails is the name looked
    /// up in the theme.
    pub fn get_style(&self, name: &str) -> Result<Style> {
        Ok(self.theme.resolve(name)?)
    }

    /// Expands `content` into a flat segment stream, depth first.
    ///
    /// No layout happens here: newlines stay inside segment text and
    /// nothing is wrapped.
    pub fn render(&self, content: &Content, options: &RenderOptions) -> Result<Vec<Segment>> {
        let mut segments = Vec::new();
        self.expand(content, options, &mut segments)?;
        Ok(segments)
    }

    /// Renders `content` and lays it out as lines.
    pub fn render_lines(&self, content: &Content, options: &RenderOptions) -> Result<Vec<Strip>> {
        let segments = self.render(content, options)?;
        Ok(wrap::layout(segments, options))
    }

    fn expand(
        &self,
        content: &Content,
        options: &RenderOptions,
        output: &mut Vec<Segment>,
    ) -> Result<()> {
        match content {
            Content::Str(text) => {
                output.extend(self.render_str(text, options)?.render());
            }
            Content::Styled(text, style) => {
                let mut text = self.render_str(text, options)?;
                text.set_style(style.clone());
                output.extend(text.render());
            }
            Content::Text(text) => output.extend(text.render()),
            Content::Segment(segment) => output.push(segment.clone()),
            Content::Group(items) => {
                if items.is_empty() {
                    return Err(ConsoleError::NotRenderable(content.describe()));
                }
                for item in items {
                    self.expand(item, options, output)?;
                }
            }
            Content::Object(renderable) => {
                trace!("expanding {}", renderable.describe());
                let items = renderable
                    .render(self, options)
                    .ok_or_else(|| ConsoleError::NotRenderable(renderable.describe()))?;
                for item in &items {
                    self.expand(item, options, output)?;
                }
            }
        }
        Ok(())
    }

    /// A string as text: markup parsed, then highlighted beneath the markup.
    pub fn render_str(&self, text: &str, options: &RenderOptions) -> Result<Text> {
        let mut rendered = if options.markup {
            Text::from_markup(text, &self.theme)?
        } else {
            Text::new(text)
        };
        if options.highlight {
            self.highlighter.highlight(&mut rendered, &self.theme)?;
        }
        Ok(rendered)
    }

    /// Prints `content` followed by a newline.
    pub fn print(&mut self, content: impl Into<Content>) -> Result<()> {
        self.print_with(content, &PrintOptions::default())
    }

    /// Prints with a style name or definition layered over the content.
    pub fn print_styled(&mut self, content: impl Into<Content>, style: &str) -> Result<()> {
        let style = self.get_style(style)?;
        self.print_with(content, &PrintOptions::new().style(style))
    }

    /// Prints `content` with per-call overrides.
    ///
    /// Nothing is written if rendering fails.
    pub fn print_with(&mut self, content: impl Into<Content>, print: &PrintOptions) -> Result<()> {
        let content = content.into();
        let options = self.options().update(print.to_update());

        let mut segments = self.render(&content, &options)?;
        if let Some(style) = &print.style {
            segments = segments.iter().map(|s| s.apply_style(style)).collect();
        }

        if self.record {
            self.history.extend(segments.iter().cloned());
            self.history.push(Segment::line());
        }

        let mut buffer = String::new();
        for line in wrap::layout(segments, &options) {
            self.encode_into(&mut buffer, line.segments());
            buffer.push('\n');
        }
        self.write_str(&buffer)
    }

    /// Writes an empty line.
    pub fn line(&mut self) -> Result<()> {
        self.print("")
    }

    pub fn show_cursor(&mut self, visible: bool) -> Result<()> {
        self.control(if visible {
            Control::ShowCursor
        } else {
            Control::HideCursor
        })
    }

    /// Writes a control sequence as is: unstyled and without a newline.
    pub fn control(&mut self, control: Control) -> Result<()> {
        let segment = Segment::control(control);
        if self.record {
            self.history.push(segment.clone());
        }
        self.write_str(segment.text())
    }

    fn encode_into(&self, buffer: &mut String, segments: &[Segment]) {
        for segment in segments {
            if segment.is_empty() {
                continue;
            }
            if segment.is_control() {
                buffer.push_str(segment.text());
                continue;
            }
            let Some(style) = segment.style() else {
                buffer.push_str(segment.text());
                continue;
            };
            let rendered = style.render(segment.text(), self.color_system);
            match style.link() {
                Some(url) if self.is_terminal => {
                    buffer.push_str("\x1b]8;;");
                    buffer.push_str(url);
                    buffer.push_str("\x1b\\");
                    buffer.push_str(&rendered);
                    buffer.push_str("\x1b]8;;\x1b\\");
                }
                _ => buffer.push_str(&rendered),
            }
        }
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.file.write_all(text.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }

    pub fn is_recording(&self) -> bool {
        self.record
    }

    /// Segments recorded so far, newlines included.
    pub fn recorded(&self) -> &[Segment] {
        &self.history
    }

    pub fn clear_record(&mut self) {
        self.history.clear();
    }

    /// The recorded output as plain text.
    pub fn export_text(&mut self, clear: bool) -> String {
        debug!("exporting {} recorded segments as text", self.history.len());
        let text = export::export_text(&self.history);
        if clear {
            self.clear_record();
        }
        text
    }

    /// The recorded output as an HTML document.
    pub fn export_html(&mut self, options: &HtmlOptions) -> String {
        debug!(
            "exporting {} recorded segments as html (inline styles: {})",
            self.history.len(),
            options.inline_styles
        );
        let html = export::export_html(&self.history, options);
        if options.clear {
            self.clear_record();
        }
        html
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("color_system", &self.color_system)
            .field("is_terminal", &self.is_terminal)
            .field("size", &self.size())
            .field("record", &self.record)
            .field("recorded", &self.history.len())
            .field("markup", &self.markup)
            .field("highlight", &self.highlight)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<console width={} {}>", self.width(), self.color_system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SharedBuffer;
    use rich::Attributes;

    fn console(system: ColorSystem) -> (Console, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let console = Console::builder()
            .color_system(system)
            .file(buffer.clone())
            .width(20)
            .build();
        (console, buffer)
    }

    #[test]
    fn auto_color_falls_back_to_none_off_terminal() {
        let console = Console::builder().file(SharedBuffer::new()).build();
        assert_eq!(console.color_system(), ColorSystem::NoColor);
    }

    #[test]
    fn auto_color_on_forced_terminal_is_standard() {
        let console = Console::builder()
            .file(SharedBuffer::new())
            .force_terminal(true)
            .build();
        assert_eq!(console.color_system(), ColorSystem::Standard);
    }

    #[test]
    fn parse_color_choice() {
        assert_eq!("auto".parse::<ColorChoice>().unwrap(), ColorChoice::Auto);
        assert_eq!(
            "256".parse::<ColorChoice>().unwrap(),
            ColorChoice::System(ColorSystem::EightBit)
        );
        assert!(matches!(
            "rainbow".parse::<ColorChoice>(),
            Err(ConsoleError::UnknownOption { .. })
        ));
    }

    #[test]
    fn size_falls_back_to_defaults() {
        let console = Console::builder().file(SharedBuffer::new()).build();
        assert_eq!(console.size(), (80, 25));
    }

    #[test]
    fn options_reflect_console() {
        let (console, _) = console(ColorSystem::EightBit);
        let options = console.options();
        assert_eq!(options.max_width(), 20);
        assert_eq!(options.color_system, ColorSystem::EightBit);
    }

    #[test]
    fn styled_content_sits_beneath_markup() {
        let (console, _) = console(ColorSystem::TrueColor);
        let content = Content::from(("[not bold]a[/]b", Style::from_attributes(Attributes::BOLD)));
        let segments = console.render(&content, &console.options()).unwrap();
        assert_eq!(segments[0].style().and_then(|s| s.get(Attributes::BOLD)), Some(false));
        assert_eq!(segments[1].style().and_then(|s| s.get(Attributes::BOLD)), Some(true));
    }

    #[test]
    fn links_use_osc8_only_on_terminals() {
        let (mut plain, buffer) = console(ColorSystem::TrueColor);
        plain.print("[link=https://x.io]x[/link]").unwrap();
        assert_eq!(buffer.take(), "x\n");

        let buffer = SharedBuffer::new();
        let mut terminal = Console::builder()
            .color_system(ColorSystem::TrueColor)
            .file(buffer.clone())
            .force_terminal(true)
            .build();
        terminal.print("[link=https://x.io]x[/link]").unwrap();
        assert_eq!(buffer.contents(), "\x1b]8;;https://x.io\x1b\\x\x1b]8;;\x1b\\\n");
    }

    #[test]
    fn display_names_width_and_system() {
        let (console, _) = console(ColorSystem::Standard);
        assert_eq!(console.to_string(), "<console width=20 standard>");
    }
}
