//! Error types for the console engine.

use std::io;

use rich::{MarkupError, MissingStyle, RichError, StyleSyntaxError};
use thiserror::Error;

/// Errors reported by [`crate::Console`] operations.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A style name is neither a theme entry nor a valid definition.
    #[error(transparent)]
    MissingStyle(#[from] MissingStyle),

    #[error("invalid style definition: {0}")]
    StyleSyntax(#[from] StyleSyntaxError),

    #[error(transparent)]
    Markup(#[from] MarkupError),

    /// A value that cannot be turned into segments.
    #[error("unable to render {0}; a str, Segment or Renderable is required")]
    NotRenderable(String),

    #[error("failed to write to the console output")]
    Io(#[from] io::Error),

    /// A configuration string that names no known option.
    #[error("unknown {kind} {value:?}")]
    UnknownOption { kind: &'static str, value: String },
}

impl From<RichError> for ConsoleError {
    fn from(err: RichError) -> Self {
        match err {
            RichError::MissingStyle(missing) => ConsoleError::MissingStyle(missing),
            RichError::Markup(markup) => ConsoleError::Markup(markup),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
