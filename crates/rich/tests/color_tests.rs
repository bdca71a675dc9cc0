//! Comprehensive tests for Color parsing and downsampling.

use rich::{Color, ColorParseError, ColorSystem};

// ============================================================================
// Named Colors
// ============================================================================

#[test]
fn parse_standard_names() {
    let names = [
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    ];
    for (index, name) in names.iter().enumerate() {
        assert_eq!(Color::parse(name).unwrap(), Color::Standard(index as u8));
    }
}

#[test]
fn parse_bright_names() {
    let names = [
        "bright_black", "bright_red", "bright_green", "bright_yellow",
        "bright_blue", "bright_magenta", "bright_cyan", "bright_white",
    ];
    for (index, name) in names.iter().enumerate() {
        assert_eq!(Color::parse(name).unwrap(), Color::Standard(index as u8 + 8));
    }
}

#[test]
fn parse_case_insensitive() {
    assert_eq!(Color::parse("RED").unwrap(), Color::Standard(1));
    assert_eq!(Color::parse("rEd").unwrap(), Color::Standard(1));
    assert_eq!(Color::parse("  blue\t").unwrap(), Color::Standard(4));
}

#[test]
fn parse_extended_names_are_truecolor() {
    for name in ["grey", "silver", "navy", "orange", "teal", "gold"] {
        let color = Color::parse(name).unwrap();
        assert_eq!(color.system(), ColorSystem::TrueColor, "{name}");
    }
}

#[test]
fn parse_default() {
    assert_eq!(Color::parse("default").unwrap(), Color::Default);
    assert_eq!(Color::Default.system(), ColorSystem::NoColor);
}

// ============================================================================
// Numeric Forms
// ============================================================================

#[test]
fn parse_hex_forms() {
    assert_eq!(Color::parse("#abc").unwrap(), Color::Rgb(0xaa, 0xbb, 0xcc));
    assert_eq!(Color::parse("#A0B1C2").unwrap(), Color::Rgb(0xa0, 0xb1, 0xc2));
}

#[test]
fn parse_rgb_function() {
    assert_eq!(Color::parse("rgb(1,2,3)").unwrap(), Color::Rgb(1, 2, 3));
    assert_eq!(Color::parse("RGB( 10 , 20 , 30 )").unwrap(), Color::Rgb(10, 20, 30));
}

#[test]
fn parse_palette_index() {
    assert_eq!(Color::parse("color(0)").unwrap(), Color::Standard(0));
    assert_eq!(Color::parse("color(15)").unwrap(), Color::Standard(15));
    assert_eq!(Color::parse("color(16)").unwrap(), Color::EightBit(16));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn parse_errors() {
    assert_eq!(
        Color::parse("chartreuse_ish"),
        Err(ColorParseError::UnknownName("chartreuse_ish".into()))
    );
    assert!(matches!(Color::parse("#12345"), Err(ColorParseError::InvalidHex(_))));
    assert!(matches!(Color::parse("rgb(1,2)"), Err(ColorParseError::InvalidRgb(_))));
    assert!(matches!(Color::parse("color(-1)"), Err(ColorParseError::InvalidIndex(_))));
    assert!(Color::parse("").is_err());
}

// ============================================================================
// Downsampling
// ============================================================================

#[test]
fn downsample_to_eight_bit() {
    assert_eq!(Color::Rgb(95, 135, 175).downsample(ColorSystem::EightBit), Color::EightBit(67));
    assert_eq!(Color::Rgb(100, 100, 100).downsample(ColorSystem::EightBit), Color::EightBit(241));
    assert_eq!(Color::Rgb(10, 10, 10).downsample(ColorSystem::EightBit), Color::EightBit(232));
    assert_eq!(Color::Rgb(200, 30, 180).downsample(ColorSystem::EightBit), Color::EightBit(163));
}

#[test]
fn downsample_to_standard() {
    assert_eq!(Color::Rgb(0, 95, 0).downsample(ColorSystem::Standard), Color::Standard(2));
    assert_eq!(Color::Rgb(200, 30, 180).downsample(ColorSystem::Standard), Color::Standard(5));
    assert_eq!(Color::EightBit(202).downsample(ColorSystem::Standard), Color::Standard(9));
    assert_eq!(Color::EightBit(240).downsample(ColorSystem::Standard), Color::Standard(8));
}

#[test]
fn downsample_exact_palette_entry_prefers_standard_index() {
    assert_eq!(Color::Rgb(255, 0, 0).downsample(ColorSystem::EightBit), Color::EightBit(9));
}

#[test]
fn downsample_to_no_color() {
    for color in [
        Color::Standard(3),
        Color::EightBit(100),
        Color::Rgb(1, 2, 3),
        Color::Default,
    ] {
        assert_eq!(color.downsample(ColorSystem::NoColor), Color::Default);
    }
}

#[test]
fn downsample_never_upsamples() {
    assert_eq!(Color::Standard(4).downsample(ColorSystem::TrueColor), Color::Standard(4));
    assert_eq!(Color::EightBit(99).downsample(ColorSystem::TrueColor), Color::EightBit(99));
    assert_eq!(Color::Default.downsample(ColorSystem::Standard), Color::Default);
}

#[test]
fn downsample_is_idempotent_and_monotonic() {
    let systems = [
        ColorSystem::NoColor,
        ColorSystem::Standard,
        ColorSystem::EightBit,
        ColorSystem::TrueColor,
    ];
    let mut colors: Vec<Color> = (0..=255u8).map(Color::from_index).collect();
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(51) {
                colors.push(Color::Rgb(r, g, b));
            }
        }
    }

    for color in colors {
        for target in systems {
            let once = color.downsample(target);
            assert!(once.system() <= target, "{color:?} -> {target:?} gave {once:?}");
            assert_eq!(once.downsample(target), once, "{color:?} at {target:?}");
            if color.system() <= target {
                assert_eq!(once, color);
            }
        }
    }
}
