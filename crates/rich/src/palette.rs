//! Static color palettes and nearest-color search.
//!
//! Both tables are built at compile time. The first 16 entries of the
//! eight-bit palette are the standard palette; entries 16..232 are the
//! 6×6×6 color cube and 232..256 the 24-step grayscale ramp.

/// An RGB triplet.
pub type Rgb = (u8, u8, u8);

/// The 16 standard ANSI colors (xterm defaults).
pub const STANDARD_PALETTE: [Rgb; 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// The full 256-color palette.
pub static EIGHT_BIT_PALETTE: [Rgb; 256] = build_eight_bit_palette();

const fn cube_level(step: usize) -> u8 {
    if step == 0 { 0 } else { (55 + step * 40) as u8 }
}

const fn build_eight_bit_palette() -> [Rgb; 256] {
    let mut palette = [(0, 0, 0); 256];
    let mut index = 0;
    while index < 16 {
        palette[index] = STANDARD_PALETTE[index];
        index += 1;
    }
    while index < 232 {
        let n = index - 16;
        palette[index] = (cube_level(n / 36), cube_level((n / 6) % 6), cube_level(n % 6));
        index += 1;
    }
    while index < 256 {
        let gray = (8 + (index - 232) * 10) as u8;
        palette[index] = (gray, gray, gray);
        index += 1;
    }
    palette
}

fn distance_squared(a: Rgb, b: Rgb) -> u32 {
    let dr = a.0.abs_diff(b.0) as u32;
    let dg = a.1.abs_diff(b.1) as u32;
    let db = a.2.abs_diff(b.2) as u32;
    dr * dr + dg * dg + db * db
}

/// Index of the palette entry closest to `rgb` by Euclidean distance.
///
/// Ties go to the lowest index. An empty palette yields 0.
pub fn nearest(palette: &[Rgb], rgb: Rgb) -> u8 {
    let mut best = 0usize;
    let mut best_distance = u32::MAX;
    for (index, entry) in palette.iter().enumerate() {
        let distance = distance_squared(*entry, rgb);
        if distance < best_distance {
            best = index;
            best_distance = distance;
            if distance == 0 {
                break;
            }
        }
    }
    best as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_layout() {
        assert_eq!(EIGHT_BIT_PALETTE[0], (0, 0, 0));
        assert_eq!(EIGHT_BIT_PALETTE[15], (255, 255, 255));
        assert_eq!(EIGHT_BIT_PALETTE[16], (0, 0, 0));
        assert_eq!(EIGHT_BIT_PALETTE[21], (0, 0, 255));
        assert_eq!(EIGHT_BIT_PALETTE[42], (0, 215, 135));
        assert_eq!(EIGHT_BIT_PALETTE[231], (255, 255, 255));
        assert_eq!(EIGHT_BIT_PALETTE[232], (8, 8, 8));
        assert_eq!(EIGHT_BIT_PALETTE[255], (238, 238, 238));
    }

    #[test]
    fn nearest_exact_match() {
        assert_eq!(nearest(&EIGHT_BIT_PALETTE, (0, 215, 135)), 42);
        assert_eq!(nearest(&STANDARD_PALETTE, (255, 0, 0)), 9);
    }

    #[test]
    fn nearest_prefers_lowest_index_on_ties() {
        // black appears at 0 and 16, white at 15 and 231
        assert_eq!(nearest(&EIGHT_BIT_PALETTE, (0, 0, 0)), 0);
        assert_eq!(nearest(&EIGHT_BIT_PALETTE, (255, 255, 255)), 15);
    }

    #[test]
    fn nearest_approximates() {
        assert_eq!(nearest(&STANDARD_PALETTE, (250, 10, 5)), 9);
        assert_eq!(nearest(&STANDARD_PALETTE, (100, 0, 0)), 1);
        assert_eq!(nearest(&EIGHT_BIT_PALETTE, (255, 128, 0)), 208);
    }
}
