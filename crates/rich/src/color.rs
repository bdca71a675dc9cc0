//! Color types and the color-capability model.
//!
//! A [`Color`] remembers the [`ColorSystem`] it was written in. Rendering for
//! a less capable terminal goes through [`Color::downsample`], a pure
//! function over the static tables in [`crate::palette`].

use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use smallvec::{SmallVec, smallvec};

use crate::error::ColorParseError;
use crate::palette::{EIGHT_BIT_PALETTE, Rgb, STANDARD_PALETTE, nearest};
use crate::terminal_theme::TerminalTheme;

/// Color capability of a destination, from least to most capable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorSystem {
    /// No color at all.
    NoColor,
    /// The 16 standard ANSI colors.
    Standard,
    /// The 256-color palette.
    EightBit,
    /// 24-bit RGB.
    TrueColor,
}

impl ColorSystem {
    pub fn name(self) -> &'static str {
        match self {
            ColorSystem::NoColor => "none",
            ColorSystem::Standard => "standard",
            ColorSystem::EightBit => "256",
            ColorSystem::TrueColor => "truecolor",
        }
    }
}

impl fmt::Display for ColorSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSystem {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "no_color" => Ok(ColorSystem::NoColor),
            "standard" | "16" => Ok(ColorSystem::Standard),
            "eight_bit" | "256" => Ok(ColorSystem::EightBit),
            "truecolor" | "24bit" => Ok(ColorSystem::TrueColor),
            other => Err(ColorParseError::UnknownSystem(other.to_string())),
        }
    }
}

/// A terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal's default foreground or background.
    Default,
    /// One of the 16 standard colors (0..16).
    Standard(u8),
    /// An index into the 256-color palette.
    EightBit(u8),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

static STANDARD_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

static EXTENDED_NAMES: phf::Map<&'static str, Rgb> = phf_map! {
    "grey" => (128, 128, 128),
    "gray" => (128, 128, 128),
    "silver" => (192, 192, 192),
    "maroon" => (128, 0, 0),
    "olive" => (128, 128, 0),
    "navy" => (0, 0, 128),
    "purple" => (128, 0, 128),
    "teal" => (0, 128, 128),
    "lime" => (0, 255, 0),
    "aqua" => (0, 255, 255),
    "fuchsia" => (255, 0, 255),
    "orange" => (255, 165, 0),
    "pink" => (255, 192, 203),
    "brown" => (165, 42, 42),
    "coral" => (255, 127, 80),
    "gold" => (255, 215, 0),
    "indigo" => (75, 0, 130),
    "violet" => (238, 130, 238),
    "crimson" => (220, 20, 60),
    "salmon" => (250, 128, 114),
    "tomato" => (255, 99, 71),
    "turquoise" => (64, 224, 208),
    "khaki" => (240, 230, 140),
    "orchid" => (218, 112, 214),
};

impl Color {
    /// Parse a color from a string.
    ///
    /// Supports:
    /// - `default`
    /// - Standard names: `red`, `bright_blue`, ...
    /// - Extended names: `orange`, `teal`, ... (24-bit)
    /// - Palette index: `color(208)`
    /// - Hex colors: `#RGB`, `#RRGGBB`
    /// - RGB function: `rgb(r, g, b)`
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::Color;
    ///
    /// assert_eq!(Color::parse("red").unwrap(), Color::Standard(1));
    /// assert_eq!(Color::parse("color(208)").unwrap(), Color::EightBit(208));
    /// assert_eq!(Color::parse("#ff5733").unwrap(), Color::Rgb(255, 87, 51));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let lower = input.trim().to_ascii_lowercase();
        let input = lower.as_str();

        if input.is_empty() {
            return Err(ColorParseError::UnknownName(input.to_string()));
        }
        if input == "default" {
            return Ok(Color::Default);
        }
        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(args) = input.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            return Self::parse_rgb_func(args);
        }
        if let Some(index) = input.strip_prefix("color(").and_then(|s| s.strip_suffix(')')) {
            let number: u8 = index
                .trim()
                .parse()
                .map_err(|_| ColorParseError::InvalidIndex(index.to_string()))?;
            return Ok(Self::from_index(number));
        }

        Self::parse_named(input)
    }

    /// A palette color; indices below 16 are standard colors.
    pub fn from_index(index: u8) -> Self {
        if index < 16 {
            Color::Standard(index)
        } else {
            Color::EightBit(index)
        }
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map_err(|_| invalid());
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            3 => Ok(Color::Rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => Ok(Color::Rgb(pair(0)?, pair(2)?, pair(4)?)),
            _ => Err(invalid()),
        }
    }

    /// Parse the part inside `rgb(...)`.
    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(ColorParseError::InvalidRgb(format!("rgb({input})")));
        };
        let channel = |name: &str, value: &str| {
            value
                .parse::<u8>()
                .map_err(|_| ColorParseError::InvalidRgb(format!("invalid {name}: {value}")))
        };
        Ok(Color::Rgb(
            channel("red", *r)?,
            channel("green", *g)?,
            channel("blue", *b)?,
        ))
    }

    fn parse_named(name: &str) -> Result<Self, ColorParseError> {
        if let Some(index) = STANDARD_NAMES.iter().position(|n| *n == name) {
            return Ok(Color::Standard(index as u8));
        }
        match EXTENDED_NAMES.get(name) {
            Some(&(r, g, b)) => Ok(Color::Rgb(r, g, b)),
            None => Err(ColorParseError::UnknownName(name.to_string())),
        }
    }

    /// The least capable system that can show this color unchanged.
    pub fn system(&self) -> ColorSystem {
        match self {
            Color::Default => ColorSystem::NoColor,
            Color::Standard(_) => ColorSystem::Standard,
            Color::EightBit(_) => ColorSystem::EightBit,
            Color::Rgb(..) => ColorSystem::TrueColor,
        }
    }

    /// Reduce this color to the nearest one representable at `target`.
    ///
    /// Never upsamples: a color already at or below `target` is returned
    /// unchanged, which also makes the operation idempotent. Reducing to
    /// [`ColorSystem::NoColor`] yields [`Color::Default`].
    pub fn downsample(&self, target: ColorSystem) -> Color {
        if self.system() <= target {
            return *self;
        }
        match (target, *self) {
            (ColorSystem::NoColor, _) => Color::Default,
            (ColorSystem::Standard, Color::EightBit(index)) if index < 16 => {
                Color::Standard(index)
            }
            (ColorSystem::Standard, Color::EightBit(index)) => {
                Color::Standard(nearest(&STANDARD_PALETTE, EIGHT_BIT_PALETTE[index as usize]))
            }
            (ColorSystem::Standard, Color::Rgb(r, g, b)) => {
                Color::Standard(nearest(&STANDARD_PALETTE, (r, g, b)))
            }
            (ColorSystem::EightBit, Color::Rgb(r, g, b)) => {
                Color::EightBit(nearest(&EIGHT_BIT_PALETTE, (r, g, b)))
            }
            (_, color) => color,
        }
    }

    /// SGR parameters selecting this color as foreground or background.
    pub fn ansi_codes(&self, foreground: bool) -> SmallVec<[u8; 5]> {
        match *self {
            Color::Default => smallvec![if foreground { 39 } else { 49 }],
            Color::Standard(index) => {
                let index = index & 0x0f;
                let base = match (foreground, index < 8) {
                    (true, true) => 30,
                    (true, false) => 90 - 8,
                    (false, true) => 40,
                    (false, false) => 100 - 8,
                };
                smallvec![base + index]
            }
            Color::EightBit(index) => smallvec![if foreground { 38 } else { 48 }, 5, index],
            Color::Rgb(r, g, b) => smallvec![if foreground { 38 } else { 48 }, 2, r, g, b],
        }
    }

    /// Resolve to RGB, using `theme` for default and standard colors.
    pub fn to_rgb(&self, theme: &TerminalTheme, foreground: bool) -> Rgb {
        match *self {
            Color::Default if foreground => theme.foreground,
            Color::Default => theme.background,
            Color::Standard(index) => theme.ansi[(index & 0x0f) as usize],
            Color::EightBit(index) if index < 16 => theme.ansi[index as usize],
            Color::EightBit(index) => EIGHT_BIT_PALETTE[index as usize],
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    /// Formats in a form [`Color::parse`] accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Default => f.write_str("default"),
            Color::Standard(index) => f.write_str(STANDARD_NAMES[(index & 0x0f) as usize]),
            Color::EightBit(index) => write!(f, "color({index})"),
            Color::Rgb(r, g, b) => f.write_str(&hex((r, g, b))),
        }
    }
}

/// Format an RGB triplet as a CSS hex color.
pub fn hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_color() {
        assert_eq!(Color::parse("red").unwrap(), Color::Standard(1));
        assert_eq!(Color::parse("Blue").unwrap(), Color::Standard(4));
        assert_eq!(Color::parse("BRIGHT_CYAN").unwrap(), Color::Standard(14));
    }

    #[test]
    fn parse_extended_name() {
        assert_eq!(Color::parse("orange").unwrap(), Color::Rgb(255, 165, 0));
    }

    #[test]
    fn parse_hex_short() {
        assert_eq!(Color::parse("#f00").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(Color::parse("#0f0").unwrap(), Color::Rgb(0, 255, 0));
    }

    #[test]
    fn parse_hex_long() {
        assert_eq!(Color::parse("#ff5733").unwrap(), Color::Rgb(255, 87, 51));
        assert_eq!(Color::parse("#FFFFFF").unwrap(), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn parse_rgb_func() {
        assert_eq!(Color::parse("rgb(255, 87, 51)").unwrap(), Color::Rgb(255, 87, 51));
        assert_eq!(Color::parse("rgb(0,0,0)").unwrap(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn parse_palette_index() {
        assert_eq!(Color::parse("color(3)").unwrap(), Color::Standard(3));
        assert_eq!(Color::parse("color(200)").unwrap(), Color::EightBit(200));
    }

    #[test]
    fn parse_invalid() {
        assert!(Color::parse("notacolor").is_err());
        assert!(Color::parse("#gg0000").is_err());
        assert!(Color::parse("#ffff").is_err());
        assert!(Color::parse("rgb(256, 0, 0)").is_err());
        assert!(Color::parse("color(256)").is_err());
    }

    #[test]
    fn standard_codes() {
        assert_eq!(Color::Standard(2).ansi_codes(true).as_slice(), &[32]);
        assert_eq!(Color::Standard(9).ansi_codes(true).as_slice(), &[91]);
        assert_eq!(Color::Standard(4).ansi_codes(false).as_slice(), &[44]);
        assert_eq!(Color::Standard(15).ansi_codes(false).as_slice(), &[107]);
    }

    #[test]
    fn standard_index_wraps_into_sixteen_colors() {
        assert_eq!(Color::Standard(200).ansi_codes(true).as_slice(), &[90]);
        assert_eq!(Color::Standard(17).ansi_codes(false).as_slice(), &[41]);
        assert_eq!(Color::Standard(255).ansi_codes(false).as_slice(), &[107]);
    }

    #[test]
    fn parse_color_system() {
        assert_eq!("256".parse::<ColorSystem>(), Ok(ColorSystem::EightBit));
        assert_eq!(" TrueColor ".parse::<ColorSystem>(), Ok(ColorSystem::TrueColor));
        assert_eq!(
            "rainbow".parse::<ColorSystem>(),
            Err(ColorParseError::UnknownSystem("rainbow".into()))
        );
    }

    #[test]
    fn extended_codes() {
        assert_eq!(Color::EightBit(208).ansi_codes(true).as_slice(), &[38, 5, 208]);
        assert_eq!(Color::Rgb(1, 2, 3).ansi_codes(false).as_slice(), &[48, 2, 1, 2, 3]);
        assert_eq!(Color::Default.ansi_codes(true).as_slice(), &[39]);
    }

    #[test]
    fn color_system_order() {
        assert!(ColorSystem::NoColor < ColorSystem::Standard);
        assert!(ColorSystem::Standard < ColorSystem::EightBit);
        assert!(ColorSystem::EightBit < ColorSystem::TrueColor);
    }

    #[test]
    fn display_parses_back() {
        for color in [
            Color::Default,
            Color::Standard(10),
            Color::EightBit(208),
            Color::Rgb(1, 2, 3),
        ] {
            assert_eq!(Color::parse(&color.to_string()).unwrap(), color);
        }
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(hex((255, 0, 16)), "#ff0010");
    }
}
