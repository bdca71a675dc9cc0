//! The render protocol.
//!
//! Anything printable is a [`Content`]. Most variants are leaves; an
//! [`Content::Object`] holds a [`Renderable`] that produces more content when
//! asked, which the console expands depth-first until only segments remain.

use std::fmt;

use rich::{Segment, Style, Text};

use crate::console::Console;
use crate::options::RenderOptions;

/// A value that knows how to turn itself into content.
///
/// Expansion is recursive and has no cycle guard: a renderable that yields
/// itself, directly or through other renderables, never terminates.
pub trait Renderable {
    /// The content this value renders to under `options`.
    ///
    /// `None` means the value has nothing renderable and fails the print.
    /// `Some(vec![])` is a valid, empty rendering.
    fn render(&self, console: &Console, options: &RenderOptions) -> Option<Vec<Content>>;

    /// Short description used in error messages.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// Every shape of printable content.
pub enum Content {
    /// A string; markup and highlighting apply when enabled.
    Str(String),
    /// A string with a base style beneath its markup.
    Styled(String, Style),
    /// Pre-styled text, printed as is.
    Text(Text),
    Segment(Segment),
    /// Several items rendered in order. An empty group is not renderable.
    Group(Vec<Content>),
    Object(Box<dyn Renderable>),
}

impl Content {
    pub fn object(renderable: impl Renderable + 'static) -> Self {
        Content::Object(Box::new(renderable))
    }

    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Content::Str(text) => format!("{text:?}"),
            Content::Styled(text, style) => format!("({text:?}, {style})"),
            Content::Text(text) => format!("Text({:?})", text.plain()),
            Content::Segment(segment) => format!("Segment({:?})", segment.text()),
            Content::Group(items) if items.is_empty() => "[]".to_string(),
            Content::Group(items) => format!("[{} items]", items.len()),
            Content::Object(renderable) => renderable.describe(),
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Str(text) => f.debug_tuple("Str").field(text).finish(),
            Content::Styled(text, style) => {
                f.debug_tuple("Styled").field(text).field(style).finish()
            }
            Content::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Content::Segment(segment) => f.debug_tuple("Segment").field(segment).finish(),
            Content::Group(items) => f.debug_tuple("Group").field(items).finish(),
            Content::Object(renderable) => {
                f.debug_tuple("Object").field(&renderable.describe()).finish()
            }
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Str(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Str(text)
    }
}

impl<S: Into<String>> From<(S, Style)> for Content {
    fn from((text, style): (S, Style)) -> Self {
        Content::Styled(text.into(), style)
    }
}

impl From<Text> for Content {
    fn from(text: Text) -> Self {
        Content::Text(text)
    }
}

impl From<Segment> for Content {
    fn from(segment: Segment) -> Self {
        Content::Segment(segment)
    }
}

impl From<Vec<Content>> for Content {
    fn from(items: Vec<Content>) -> Self {
        Content::Group(items)
    }
}

impl From<Box<dyn Renderable>> for Content {
    fn from(renderable: Box<dyn Renderable>) -> Self {
        Content::Object(renderable)
    }
}
