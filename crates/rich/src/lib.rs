//! Styles, colors and markup for terminal text.
//!
//! This crate holds the value layer of the console: everything that can be
//! computed without an output destination.
//!
//! # Overview
//!
//! The Rich markup format uses square brackets for styling:
//!
//! - `[bold]text[/]` - Apply bold styling
//! - `[red]text[/]` - Apply red foreground color
//! - `[on blue]text[/]` - Apply blue background color
//! - `[bold white on blue]text[/bold white on blue]` - Combined styling, closed by name
//! - `[link=https://example.com]text[/link]` - Hyperlink
//! - `[[` - Literal `[`
//!
//! Style names that are not inline definitions are looked up in a [`Theme`].
//!
//! # Usage
//!
//! ```
//! use rich::{Color, ColorSystem, Style, Text, Theme};
//!
//! let text = Text::from_markup("[bold red]Hello[/] World", &Theme::default()).unwrap();
//! assert_eq!(text.plain(), "Hello World");
//!
//! let style = Style::parse("bold #ff8000").unwrap();
//! assert_eq!(style.render("hi", ColorSystem::EightBit), "\x1b[1;38;5;208mhi\x1b[0m");
//! assert_eq!(Color::Rgb(255, 128, 0).downsample(ColorSystem::Standard), Color::Standard(3));
//! ```

pub mod cells;
pub mod color;
pub mod error;
pub mod highlighter;
pub mod palette;
pub mod parser;
pub mod segment;
pub mod span;
pub mod style;
pub mod terminal_theme;
pub mod text;
pub mod theme;

pub use color::{Color, ColorSystem};
pub use error::{ColorParseError, MarkupError, MissingStyle, RichError, StyleSyntaxError};
pub use highlighter::{Highlighter, RegexHighlighter, ReprHighlighter};
pub use segment::{Control, Segment};
pub use span::Span;
pub use style::{Attributes, Style};
pub use terminal_theme::TerminalTheme;
pub use text::Text;
pub use theme::Theme;
