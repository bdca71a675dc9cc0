//! Named styles.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::color::Color;
use crate::error::{MissingStyle, StyleSyntaxError};
use crate::style::{Attributes, Style};

/// Definitions of the built-in named styles.
pub const DEFAULT_STYLES: [(&str, &str); 10] = [
    ("repr.brace", "bold"),
    ("repr.comma", "bold"),
    ("repr.number", "bold blue not italic"),
    ("repr.bool_true", "italic bright_green"),
    ("repr.bool_false", "italic bright_red"),
    ("repr.none", "italic magenta"),
    ("repr.str", "green"),
    ("repr.url", "underline bright_blue not bold not italic"),
    ("repr.ellipsis", "yellow"),
    ("rule.line", "bright_green"),
];

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    let bold = Style::from_attributes(Attributes::BOLD);
    let italic = Style::from_attributes(Attributes::ITALIC);
    Theme::new([
        ("repr.brace", bold.clone()),
        ("repr.comma", bold.clone()),
        (
            "repr.number",
            bold.with_fg(Color::Standard(4)).with(Attributes::ITALIC, false),
        ),
        ("repr.bool_true", italic.clone().with_fg(Color::Standard(10))),
        ("repr.bool_false", italic.clone().with_fg(Color::Standard(9))),
        ("repr.none", italic.with_fg(Color::Standard(5))),
        ("repr.str", Style::new().with_fg(Color::Standard(2))),
        (
            "repr.url",
            Style::from_attributes(Attributes::UNDERLINE)
                .with_fg(Color::Standard(12))
                .with(Attributes::BOLD | Attributes::ITALIC, false),
        ),
        ("repr.ellipsis", Style::new().with_fg(Color::Standard(3))),
        ("rule.line", Style::new().with_fg(Color::Standard(10))),
    ])
});

/// A case-sensitive mapping from style name to [`Style`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new<K: Into<String>>(styles: impl IntoIterator<Item = (K, Style)>) -> Self {
        Self {
            styles: styles
                .into_iter()
                .map(|(name, style)| (name.into(), style))
                .collect(),
        }
    }

    /// A theme with no named styles.
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Build a theme from `(name, definition)` pairs.
    pub fn from_definitions<'a>(
        definitions: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, StyleSyntaxError> {
        let mut styles = HashMap::new();
        for (name, definition) in definitions {
            styles.insert(name.to_string(), Style::parse(definition)?);
        }
        Ok(Self { styles })
    }

    /// This theme with `other`'s entries added, replacing same-named ones.
    pub fn extend(mut self, other: Theme) -> Self {
        self.styles.extend(other.styles);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Resolve a style name or inline definition.
    ///
    /// The inline parse is tried first, then the theme entry.
    pub fn resolve(&self, name: &str) -> Result<Style, MissingStyle> {
        match Style::parse(name) {
            Ok(style) => Ok(style),
            Err(reason) => self.get(name).cloned().ok_or_else(|| MissingStyle {
                name: name.to_string(),
                reason,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.styles.iter().map(|(name, style)| (name.as_str(), style))
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME.clone()
    }
}
