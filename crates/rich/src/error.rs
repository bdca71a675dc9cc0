//! Error types for colors, styles and markup.

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Invalid RGB color format.
    #[error("invalid RGB color: {0}")]
    InvalidRgb(String),

    /// `color(N)` with a number outside 0..=255.
    #[error("invalid palette index: {0}")]
    InvalidIndex(String),

    /// A color system name that is none of `none`, `standard`, `256` or `truecolor`.
    #[error("unknown color system: {0}")]
    UnknownSystem(String),
}

/// An inline style definition that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleSyntaxError {
    /// Invalid color in style.
    #[error("invalid color in style: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// A word that is neither an attribute, a keyword nor a color.
    #[error("unable to parse {0:?} as a style attribute or color")]
    UnknownToken(String),

    /// `on` was the last word.
    #[error("color expected after 'on'")]
    ExpectedColor,

    /// `not` was followed by nothing or by something other than an attribute.
    #[error("attribute expected after 'not'")]
    ExpectedAttribute,

    /// `link` was the last word.
    #[error("URL expected after 'link'")]
    ExpectedUrl,
}

/// A style name that is neither a theme entry nor a valid inline definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to get style {name:?}; {reason}")]
pub struct MissingStyle {
    /// The name exactly as it was requested.
    pub name: String,
    /// Why the inline parse failed.
    pub reason: StyleSyntaxError,
}

/// Errors raised while tokenizing markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// `[/]` with no open tag.
    #[error("closing tag '[/]' at position {position} has nothing to close")]
    NothingToClose { position: usize },

    /// `[/name]` where no open tag is called `name`.
    #[error("closing tag '[/{tag}]' at position {position} doesn't match any open tag")]
    UnmatchedClose { tag: String, position: usize },
}

/// Any failure on the markup and highlight paths.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RichError {
    #[error(transparent)]
    MissingStyle(#[from] MissingStyle),

    #[error(transparent)]
    Markup(#[from] MarkupError),
}
