//! Style types for Rich markup.
//!
//! A [`Style`] combines colors, text attributes and an optional link target.
//! Attributes are tri-state: each one is either unset, explicitly on, or
//! explicitly off (`not bold`). Combining two styles lets every attribute
//! the overlay sets win while unset ones fall through to the base.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::color::{Color, ColorSystem, hex};
use crate::error::{ColorParseError, StyleSyntaxError};
use crate::terminal_theme::{TerminalTheme, blend_rgb};

bitflags! {
    /// Text attributes, in SGR order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attributes: u16 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const BLINK2 = 1 << 5;
        const REVERSE = 1 << 6;
        const CONCEAL = 1 << 7;
        const STRIKE = 1 << 8;
        const UNDERLINE2 = 1 << 9;
        const FRAME = 1 << 10;
        const ENCIRCLE = 1 << 11;
        const OVERLINE = 1 << 12;
    }
}

/// Each attribute with its SGR parameter, in emission order.
const SGR_ATTRIBUTES: [(Attributes, u8); 13] = [
    (Attributes::BOLD, 1),
    (Attributes::DIM, 2),
    (Attributes::ITALIC, 3),
    (Attributes::UNDERLINE, 4),
    (Attributes::BLINK, 5),
    (Attributes::BLINK2, 6),
    (Attributes::REVERSE, 7),
    (Attributes::CONCEAL, 8),
    (Attributes::STRIKE, 9),
    (Attributes::UNDERLINE2, 21),
    (Attributes::FRAME, 51),
    (Attributes::ENCIRCLE, 52),
    (Attributes::OVERLINE, 53),
];

impl Attributes {
    /// Look up an attribute by its style-definition name or alias.
    pub fn from_keyword(name: &str) -> Option<Attributes> {
        let attribute = match name {
            "bold" | "b" => Attributes::BOLD,
            "dim" | "d" => Attributes::DIM,
            "italic" | "i" => Attributes::ITALIC,
            "underline" | "u" => Attributes::UNDERLINE,
            "blink" => Attributes::BLINK,
            "blink2" => Attributes::BLINK2,
            "reverse" | "r" => Attributes::REVERSE,
            "conceal" | "c" => Attributes::CONCEAL,
            "strike" | "s" | "strikethrough" => Attributes::STRIKE,
            "underline2" | "uu" => Attributes::UNDERLINE2,
            "frame" => Attributes::FRAME,
            "encircle" => Attributes::ENCIRCLE,
            "overline" | "o" => Attributes::OVERLINE,
            _ => return None,
        };
        Some(attribute)
    }

    /// Canonical name of a single attribute.
    pub fn name(self) -> Option<&'static str> {
        ATTRIBUTE_NAMES
            .iter()
            .find(|(attribute, _)| *attribute == self)
            .map(|(_, name)| *name)
    }
}

const ATTRIBUTE_NAMES: [(Attributes, &str); 13] = [
    (Attributes::BOLD, "bold"),
    (Attributes::DIM, "dim"),
    (Attributes::ITALIC, "italic"),
    (Attributes::UNDERLINE, "underline"),
    (Attributes::BLINK, "blink"),
    (Attributes::BLINK2, "blink2"),
    (Attributes::REVERSE, "reverse"),
    (Attributes::CONCEAL, "conceal"),
    (Attributes::STRIKE, "strike"),
    (Attributes::UNDERLINE2, "underline2"),
    (Attributes::FRAME, "frame"),
    (Attributes::ENCIRCLE, "encircle"),
    (Attributes::OVERLINE, "overline"),
];

/// Complete style specification including colors, attributes and link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Attribute values; only meaningful where `set_attributes` has a bit.
    attributes: Attributes,
    /// Which attributes this style has an opinion on.
    set_attributes: Attributes,
    link: Option<String>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The null style; combining with it changes nothing.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set `attributes` explicitly on or off.
    pub fn with(mut self, attributes: Attributes, value: bool) -> Self {
        self.set_attributes |= attributes;
        self.attributes.set(attributes, value);
        self
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// A style that only turns on `attributes`.
    pub fn from_attributes(attributes: Attributes) -> Self {
        Self::new().with(attributes, true)
    }

    /// Returns true if no style properties are set.
    pub fn is_null(&self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && self.set_attributes.is_empty()
            && self.link.is_none()
    }

    /// `Some(value)` if this style sets `attribute`, `None` if it inherits.
    pub fn get(&self, attribute: Attributes) -> Option<bool> {
        self.set_attributes
            .contains(attribute)
            .then(|| self.attributes.contains(attribute))
    }

    /// Whether `attribute` is on; unset counts as off.
    pub fn has(&self, attribute: Attributes) -> bool {
        self.get(attribute).unwrap_or(false)
    }

    /// Attributes that are explicitly on.
    pub fn enabled(&self) -> Attributes {
        self.attributes & self.set_attributes
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Layer `overlay` on top of this style.
    ///
    /// Every attribute, color or link the overlay sets wins; everything it
    /// leaves unset is inherited from `self`. Folding a list of styles from
    /// left to right therefore gives the last writer precedence.
    pub fn combine(&self, overlay: &Style) -> Style {
        Style {
            fg: overlay.fg.or(self.fg),
            bg: overlay.bg.or(self.bg),
            attributes: (self.attributes & !overlay.set_attributes)
                | (overlay.attributes & overlay.set_attributes),
            set_attributes: self.set_attributes | overlay.set_attributes,
            link: overlay.link.clone().or_else(|| self.link.clone()),
        }
    }

    /// Left fold of `styles` with [`Style::combine`].
    pub fn combine_all<'a>(styles: impl IntoIterator<Item = &'a Style>) -> Style {
        styles
            .into_iter()
            .fold(Style::null(), |acc, style| acc.combine(style))
    }

    /// Parse a style definition like `"bold red on blue"`.
    ///
    /// Grammar, word by word:
    /// - an attribute name or alias (`bold`, `b`, `italic`, `i`, ...)
    /// - `not <attribute>` to switch an attribute off explicitly
    /// - `on <color>` for the background
    /// - `link <url>` for a hyperlink target
    /// - any other word is a foreground color
    ///
    /// `none` and the empty string give the null style.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::{Attributes, Color, Style};
    ///
    /// let style = Style::parse("bold red on blue").unwrap();
    /// assert_eq!(style.get(Attributes::BOLD), Some(true));
    /// assert_eq!(style.fg, Some(Color::Standard(1)));
    /// assert_eq!(style.bg, Some(Color::Standard(4)));
    ///
    /// assert!(Style::parse("foo bar").is_err());
    /// ```
    pub fn parse(definition: &str) -> Result<Self, StyleSyntaxError> {
        let definition = definition.trim();
        if definition.is_empty() || definition.eq_ignore_ascii_case("none") {
            return Ok(Style::null());
        }

        let mut style = Style::new();
        let mut words = definition.split_whitespace();

        while let Some(original) = words.next() {
            let word = original.to_ascii_lowercase();
            match word.as_str() {
                "on" => {
                    let color = words.next().ok_or(StyleSyntaxError::ExpectedColor)?;
                    style.bg = Some(Color::parse(color)?);
                }
                "not" => {
                    let attribute = words
                        .next()
                        .and_then(|w| Attributes::from_keyword(&w.to_ascii_lowercase()))
                        .ok_or(StyleSyntaxError::ExpectedAttribute)?;
                    style = style.with(attribute, false);
                }
                "link" => {
                    let url = words.next().ok_or(StyleSyntaxError::ExpectedUrl)?;
                    style.link = Some(url.to_string());
                }
                _ => {
                    if let Some(attribute) = Attributes::from_keyword(&word) {
                        style = style.with(attribute, true);
                        continue;
                    }
                    style.fg = Some(Color::parse(&word).map_err(|err| match err {
                        ColorParseError::UnknownName(_) => {
                            StyleSyntaxError::UnknownToken(original.to_string())
                        }
                        other => StyleSyntaxError::InvalidColor(other),
                    })?);
                }
            }
        }

        Ok(style)
    }

    /// SGR parameters for this style at the given color capability.
    ///
    /// Attributes come first in SGR order, then the foreground, then the
    /// background. Colors are downsampled to `system`; at
    /// [`ColorSystem::NoColor`] no color codes are produced but attribute
    /// codes still are.
    pub fn to_ansi_codes(&self, system: ColorSystem) -> SmallVec<[u8; 16]> {
        let mut codes = SmallVec::new();
        let enabled = self.enabled();
        for (attribute, code) in SGR_ATTRIBUTES {
            if enabled.contains(attribute) {
                codes.push(code);
            }
        }
        if system != ColorSystem::NoColor {
            if let Some(fg) = self.fg {
                codes.extend(fg.downsample(system).ansi_codes(true));
            }
            if let Some(bg) = self.bg {
                codes.extend(bg.downsample(system).ansi_codes(false));
            }
        }
        codes
    }

    /// The SGR parameters joined with `;`, or an empty string.
    pub fn sgr(&self, system: ColorSystem) -> String {
        let codes = self.to_ansi_codes(system);
        let mut out = String::with_capacity(codes.len() * 3);
        for (index, code) in codes.iter().enumerate() {
            if index > 0 {
                out.push(';');
            }
            out.push_str(&code.to_string());
        }
        out
    }

    /// Wrap `text` in this style's escape sequence.
    ///
    /// Returns `text` unchanged when the style produces no codes.
    pub fn render(&self, text: &str, system: ColorSystem) -> String {
        let sgr = self.sgr(system);
        if sgr.is_empty() {
            text.to_string()
        } else {
            format!("\x1b[{sgr}m{text}\x1b[0m")
        }
    }

    /// CSS properties equivalent to this style.
    ///
    /// Reverse swaps the colors (falling back to the theme's defaults) and
    /// dim blends the foreground halfway toward the background.
    pub fn to_css(&self, theme: &TerminalTheme) -> Vec<(&'static str, String)> {
        let mut properties = Vec::new();

        let (mut fg, mut bg) = (self.fg, self.bg);
        let reverse = self.has(Attributes::REVERSE);
        if reverse {
            std::mem::swap(&mut fg, &mut bg);
        }
        let dim = self.has(Attributes::DIM);

        if fg.is_some() || dim || reverse {
            let fg_rgb = match fg {
                Some(color) => color.to_rgb(theme, !reverse),
                None if reverse => theme.background,
                None => theme.foreground,
            };
            let fg_rgb = if dim {
                let bg_rgb = match bg {
                    Some(color) => color.to_rgb(theme, reverse),
                    None if reverse => theme.foreground,
                    None => theme.background,
                };
                blend_rgb(fg_rgb, bg_rgb, 0.5)
            } else {
                fg_rgb
            };
            properties.push(("color", hex(fg_rgb)));
        }
        if bg.is_some() || reverse {
            let bg_rgb = match bg {
                Some(color) => color.to_rgb(theme, reverse),
                None => theme.foreground,
            };
            properties.push(("background-color", hex(bg_rgb)));
        }
        if self.has(Attributes::BOLD) {
            properties.push(("font-weight", "bold".to_string()));
        }
        if self.has(Attributes::ITALIC) {
            properties.push(("font-style", "italic".to_string()));
        }

        let mut decorations = Vec::new();
        if self.has(Attributes::UNDERLINE) || self.has(Attributes::UNDERLINE2) {
            decorations.push("underline");
        }
        if self.has(Attributes::STRIKE) {
            decorations.push("line-through");
        }
        if self.has(Attributes::OVERLINE) {
            decorations.push("overline");
        }
        if !decorations.is_empty() {
            properties.push(("text-decoration", decorations.join(" ")));
        }

        properties
    }

    /// [`Style::to_css`] formatted as a declaration list.
    pub fn css(&self, theme: &TerminalTheme) -> String {
        self.to_css(theme)
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl FromStr for Style {
    type Err = StyleSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::parse(s)
    }
}

impl fmt::Display for Style {
    /// Formats as a definition that parses back to an equal style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words: Vec<String> = Vec::new();
        for (attribute, _) in SGR_ATTRIBUTES {
            if let (Some(value), Some(name)) = (self.get(attribute), attribute.name()) {
                words.push(if value {
                    name.to_string()
                } else {
                    format!("not {name}")
                });
            }
        }
        if let Some(fg) = self.fg {
            words.push(fg.to_string());
        }
        if let Some(bg) = self.bg {
            words.push(format!("on {bg}"));
        }
        if let Some(link) = &self.link {
            words.push(format!("link {link}"));
        }
        if words.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&words.join(" "))
        }
    }
}
