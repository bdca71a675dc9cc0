//! Colors of the terminal a recording is replayed against.

use crate::palette::{Rgb, STANDARD_PALETTE};

/// Default foreground, default background and the 16 standard colors.
///
/// Exporters use this to turn default and standard colors into concrete
/// RGB values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalTheme {
    pub foreground: Rgb,
    pub background: Rgb,
    pub ansi: [Rgb; 16],
}

impl TerminalTheme {
    pub fn new(foreground: Rgb, background: Rgb, ansi: [Rgb; 16]) -> Self {
        Self {
            foreground,
            background,
            ansi,
        }
    }
}

impl Default for TerminalTheme {
    fn default() -> Self {
        Self::new((0, 0, 0), (255, 255, 255), STANDARD_PALETTE)
    }
}

/// Linear blend from `a` toward `b`; `cross` of 0 is `a`, 1 is `b`.
pub fn blend_rgb(a: Rgb, b: Rgb, cross: f32) -> Rgb {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * cross).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_halfway() {
        assert_eq!(blend_rgb((0, 0, 0), (255, 255, 255), 0.5), (128, 128, 128));
        assert_eq!(blend_rgb((10, 20, 30), (10, 20, 30), 0.5), (10, 20, 30));
    }

    #[test]
    fn blend_extremes() {
        assert_eq!(blend_rgb((0, 100, 200), (255, 0, 0), 0.0), (0, 100, 200));
        assert_eq!(blend_rgb((0, 100, 200), (255, 0, 0), 1.0), (255, 0, 0));
    }
}
