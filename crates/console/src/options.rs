//! Render options passed down the render tree.

use std::fmt;
use std::str::FromStr;

use rich::ColorSystem;

use crate::error::ConsoleError;

/// How lines are aligned within the available width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Justify {
    /// Leave lines as they are, without padding.
    #[default]
    Default,
    Left,
    Center,
    Right,
    /// Stretch the gaps between words so every line but the last fills the width.
    Full,
}

impl FromStr for Justify {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Justify::Default),
            "left" => Ok(Justify::Left),
            "center" => Ok(Justify::Center),
            "right" => Ok(Justify::Right),
            "full" => Ok(Justify::Full),
            other => Err(ConsoleError::UnknownOption {
                kind: "justify",
                value: other.to_string(),
            }),
        }
    }
}

/// What happens to a word too long to fit on a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Break it over as many lines as needed.
    #[default]
    Fold,
    /// Cut the line at the width.
    Crop,
    /// Cut the line and mark the cut with `…`.
    Ellipsis,
}

impl FromStr for Overflow {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(Overflow::Fold),
            "crop" => Ok(Overflow::Crop),
            "ellipsis" => Ok(Overflow::Ellipsis),
            other => Err(ConsoleError::UnknownOption {
                kind: "overflow",
                value: other.to_string(),
            }),
        }
    }
}

/// Options for one render pass.
///
/// `min_width <= max_width` always holds: the constructor and every update
/// clamp `min_width` down to `max_width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    min_width: usize,
    max_width: usize,
    pub justify: Justify,
    pub overflow: Overflow,
    pub color_system: ColorSystem,
    pub is_terminal: bool,
    pub encoding: String,
    /// Parse markup in string content.
    pub markup: bool,
    /// Run the console's highlighter over string content.
    pub highlight: bool,
}

/// Field overrides for [`RenderOptions::update`]; `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionsUpdate {
    /// Sets both `min_width` and `max_width`.
    pub width: Option<usize>,
    pub min_width: Option<usize>,
    pub max_width: Option<usize>,
    pub justify: Option<Justify>,
    pub overflow: Option<Overflow>,
    pub color_system: Option<ColorSystem>,
    pub is_terminal: Option<bool>,
    pub encoding: Option<String>,
    pub markup: Option<bool>,
    pub highlight: Option<bool>,
}

impl OptionsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
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

    pub fn color_system(mut self, system: ColorSystem) -> Self {
        self.color_system = Some(system);
        self
    }

    pub fn is_terminal(mut self, is_terminal: bool) -> Self {
        self.is_terminal = Some(is_terminal);
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
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
}

impl RenderOptions {
    pub fn new(min_width: usize, max_width: usize) -> Self {
        Self {
            min_width: min_width.min(max_width),
            max_width,
            justify: Justify::Default,
            overflow: Overflow::Fold,
            color_system: ColorSystem::NoColor,
            is_terminal: false,
            encoding: "utf-8".to_string(),
            markup: true,
            highlight: true,
        }
    }

    pub fn min_width(&self) -> usize {
        self.min_width
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// A copy with the given fields replaced.
    ///
    /// `width` sets both bounds; an explicit `min_width` or `max_width` in
    /// the same update takes precedence over it.
    ///
    /// ```
    /// use rich_console::{Justify, OptionsUpdate, RenderOptions};
    ///
    /// let options = RenderOptions::new(10, 20);
    /// let narrow = options.update(OptionsUpdate::new().width(15));
    /// assert_eq!((narrow.min_width(), narrow.max_width()), (15, 15));
    ///
    /// let right = options.update(OptionsUpdate::new().max_width(8).justify(Justify::Right));
    /// assert_eq!((right.min_width(), right.max_width()), (8, 8));
    /// ```
    pub fn update(&self, update: OptionsUpdate) -> RenderOptions {
        let mut options = self.clone();
        if let Some(width) = update.width {
            options.min_width = width;
            options.max_width = width;
        }
        if let Some(min_width) = update.min_width {
            options.min_width = min_width;
        }
        if let Some(max_width) = update.max_width {
            options.max_width = max_width;
        }
        options.min_width = options.min_width.min(options.max_width);

        if let Some(justify) = update.justify {
            options.justify = justify;
        }
        if let Some(overflow) = update.overflow {
            options.overflow = overflow;
        }
        if let Some(system) = update.color_system {
            options.color_system = system;
        }
        if let Some(is_terminal) = update.is_terminal {
            options.is_terminal = is_terminal;
        }
        if let Some(encoding) = update.encoding {
            options.encoding = encoding;
        }
        if let Some(markup) = update.markup {
            options.markup = markup;
        }
        if let Some(highlight) = update.highlight {
            options.highlight = highlight;
        }
        options
    }

    /// A copy with both width bounds set to `width`.
    pub fn update_width(&self, width: usize) -> RenderOptions {
        self.update(OptionsUpdate::new().width(width))
    }
}

impl fmt::Display for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<options width={}..{} justify={:?} overflow={:?} {}>",
            self.min_width, self.max_width, self.justify, self.overflow, self.color_system
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_min_width() {
        let options = RenderOptions::new(30, 20);
        assert_eq!(options.min_width(), 20);
        assert_eq!(options.max_width(), 20);
    }

    #[test]
    fn explicit_bounds_override_width() {
        let options = RenderOptions::new(1, 2).update(
            OptionsUpdate::new().width(50).min_width(10),
        );
        assert_eq!((options.min_width(), options.max_width()), (10, 50));
    }

    #[test]
    fn parse_justify_and_overflow() {
        assert_eq!("Right".parse::<Justify>().unwrap(), Justify::Right);
        assert_eq!("ellipsis".parse::<Overflow>().unwrap(), Overflow::Ellipsis);
        assert!(matches!(
            "middle".parse::<Justify>(),
            Err(ConsoleError::UnknownOption { kind: "justify", .. })
        ));
    }
}
