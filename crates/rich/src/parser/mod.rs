//! Parser for Rich markup.
//!
//! This module contains the lexer, tag parser, and main markup parser.

mod lexer;
mod markup;
mod tag;

pub use lexer::{Lexer, Token};
pub use markup::parse;
pub use tag::TagContent;

/// Escape `text` so that markup parsing gives it back unchanged.
///
/// ```
/// use rich::parser::{escape, parse};
/// use rich::Theme;
///
/// let pairs = parse(&escape("[bold]x"), &Theme::default()).unwrap();
/// assert_eq!(pairs[0].0, "[bold]x");
/// ```
pub fn escape(text: &str) -> String {
    text.replace('[', "[[")
}
