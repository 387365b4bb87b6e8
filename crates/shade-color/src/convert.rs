//! Color space conversions — hex ⇄ RGB ⇄ HSL, plus css color parsing.
//!
//! These are the leaf operations of the palette pipeline. Hex parsing is
//! deliberately forgiving: theme definitions come from hand-written
//! configuration, and a typo'd seed color must degrade to black instead of
//! taking the whole catalog down. The one strict entry point is
//! [`css_colors_to_rgb`], whose inputs are code, not configuration.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A color string did not match the expected format.
///
/// Only two operations fail this way: [`css_colors_to_rgb`] on a malformed
/// `rgb()`/`rgba()` string, and [`hsl_to_hsla`](crate::hsl_to_hsla) on a
/// malformed HSL string. Every other malformed input degrades silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorFormatError {
    /// Input did not match `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    Css(String),
    /// Input did not match `hsl(h, s%, l%)`.
    Hsl(String),
}

impl fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(input) => write!(f, "invalid color string: {input}"),
            Self::Hsl(input) => write!(f, "invalid HSL color: {input}"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ─── Hex ⇄ RGB ───────────────────────────────────────────────────────────────

/// Parse a hex color into `[r, g, b]`.
///
/// Accepts a leading `#` and ignores `-`/`.` characters anywhere in the
/// string. 3-digit shorthand duplicates each digit (`#f53` → `#ff5533`),
/// 6-digit parses directly. Anything else — wrong length, non-hex digits,
/// empty input — yields `[0, 0, 0]`. Never an error: malformed seed colors
/// must produce a palette, not a crash.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let cleaned: Vec<u8> = hex
        .strip_prefix('#')
        .unwrap_or(hex)
        .bytes()
        .filter(|b| *b != b'-' && *b != b'.')
        .collect();

    let digits: [u8; 6] = match cleaned.len() {
        3 => [
            cleaned[0], cleaned[0], cleaned[1], cleaned[1], cleaned[2], cleaned[2],
        ],
        6 => [
            cleaned[0], cleaned[1], cleaned[2], cleaned[3], cleaned[4], cleaned[5],
        ],
        _ => return [0, 0, 0],
    };

    let channel = |hi: u8, lo: u8| -> Option<u8> {
        Some(hex_digit(hi)? << 4 | hex_digit(lo)?)
    };

    match (
        channel(digits[0], digits[1]),
        channel(digits[2], digits[3]),
        channel(digits[4], digits[5]),
    ) {
        (Some(r), Some(g), Some(b)) => [r, g, b],
        _ => [0, 0, 0],
    }
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Encode RGB channels as a `#rrggbb` string.
///
/// Channels are clamped to [0, 255] before encoding — callers pass raw
/// arithmetic results (averages plus offsets, scaled values) and rely on
/// the clamp.
#[must_use]
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        clamp_channel(r),
        clamp_channel(g),
        clamp_channel(b)
    )
}

#[inline]
fn clamp_channel(c: i32) -> u8 {
    c.clamp(0, 255) as u8
}

// ─── RGB → HSL ───────────────────────────────────────────────────────────────

/// Convert an RGB triple to an `hsl(h, s%, l%)` string.
///
/// Standard min/max lightness formula with hue computed in the six-sector
/// piecewise form. Hue is `round(h * 360)` — rounding, not truncation — so
/// a hue just below the wrap point can legitimately serialize as 360.
/// Consumers treat 360 as 0 mod 360.
#[must_use]
pub fn rgb_to_hsl(rgb: [u8; 3]) -> String {
    let r = f64::from(rgb[0]) / 255.0;
    let g = f64::from(rgb[1]) / 255.0;
    let b = f64::from(rgb[2]) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let l = (max + min) / 2.0;
    let mut h = 0.0;
    let mut s = 0.0;

    if max > min {
        let d = max - min;
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    format!(
        "hsl({}, {}%, {}%)",
        (h * 360.0).round() as u16,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8
    )
}

// ─── CSS color strings ───────────────────────────────────────────────────────

static CSS_RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\((\d+),\s*(\d+),\s*(\d+)(?:,\s*(\d+(?:\.\d+)?))?\)")
        .expect("css rgb pattern compiles")
});

/// Parse a `rgb(r, g, b)` or `rgba(r, g, b, a)` string into `[r, g, b]`.
///
/// The alpha component is parsed and discarded — contrast math operates on
/// the opaque channels only.
///
/// # Errors
///
/// Returns [`ColorFormatError::Css`] if the string does not match the
/// `rgb()`/`rgba()` pattern.
pub fn css_colors_to_rgb(css: &str) -> Result<[u8; 3], ColorFormatError> {
    let caps = CSS_RGB
        .captures(css)
        .ok_or_else(|| ColorFormatError::Css(css.to_string()))?;

    // \d+ only fails to parse on overflow; out-of-range channels saturate.
    let channel = |i: usize| -> u8 { caps[i].parse::<u32>().map_or(255, |v| v.min(255) as u8) };

    Ok([channel(1), channel(2), channel(3)])
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── hex_to_rgb ──────────────────────────────────────────────────

    #[test]
    fn hex_six_digits() {
        assert_eq!(hex_to_rgb("#ff5733"), [255, 87, 51]);
    }

    #[test]
    fn hex_without_hash() {
        assert_eq!(hex_to_rgb("ff5733"), [255, 87, 51]);
    }

    #[test]
    fn hex_three_digits_duplicates() {
        assert_eq!(hex_to_rgb("#f53"), [255, 85, 51]);
    }

    #[test]
    fn hex_uppercase() {
        assert_eq!(hex_to_rgb("#FF5733"), [255, 87, 51]);
    }

    #[test]
    fn hex_strips_dashes_and_dots() {
        assert_eq!(hex_to_rgb("#ff-57.33"), [255, 87, 51]);
    }

    #[test]
    fn hex_empty_is_black() {
        assert_eq!(hex_to_rgb(""), [0, 0, 0]);
    }

    #[test]
    fn hex_wrong_length_is_black() {
        assert_eq!(hex_to_rgb("12"), [0, 0, 0]);
        assert_eq!(hex_to_rgb("#1234"), [0, 0, 0]);
        assert_eq!(hex_to_rgb("#12345"), [0, 0, 0]);
    }

    #[test]
    fn hex_invalid_digits_is_black() {
        assert_eq!(hex_to_rgb("#zzzzzz"), [0, 0, 0]);
        assert_eq!(hex_to_rgb("#12345g"), [0, 0, 0]);
    }

    // ── rgb_to_hex ──────────────────────────────────────────────────

    #[test]
    fn rgb_to_hex_encodes_lowercase_padded() {
        assert_eq!(rgb_to_hex(255, 87, 5), "#ff5705");
    }

    #[test]
    fn rgb_to_hex_clamps() {
        assert_eq!(rgb_to_hex(-20, 300, 128), "#00ff80");
    }

    #[test]
    fn hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#ff5733", "#38bdf8", "#0a0b0c"] {
            let [r, g, b] = hex_to_rgb(hex);
            assert_eq!(
                rgb_to_hex(i32::from(r), i32::from(g), i32::from(b)),
                hex,
                "round trip failed for {hex}"
            );
        }
    }

    // ── rgb_to_hsl ──────────────────────────────────────────────────

    #[test]
    fn hsl_pure_red() {
        assert_eq!(rgb_to_hsl([255, 0, 0]), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn hsl_pure_blue() {
        assert_eq!(rgb_to_hsl([0, 0, 255]), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn hsl_gray_has_no_saturation() {
        assert_eq!(rgb_to_hsl([128, 128, 128]), "hsl(0, 0%, 50%)");
    }

    #[test]
    fn hsl_white_and_black() {
        assert_eq!(rgb_to_hsl([255, 255, 255]), "hsl(0, 0%, 100%)");
        assert_eq!(rgb_to_hsl([0, 0, 0]), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn hsl_hue_can_round_to_360() {
        // Hue sits just below the wrap point; round(h * 360) lands on 360.
        assert_eq!(rgb_to_hsl([255, 0, 1]), "hsl(360, 100%, 50%)");
    }

    // ── css_colors_to_rgb ───────────────────────────────────────────

    #[test]
    fn css_rgb_parses() {
        assert_eq!(css_colors_to_rgb("rgb(255, 0, 0)"), Ok([255, 0, 0]));
    }

    #[test]
    fn css_rgba_discards_alpha() {
        assert_eq!(css_colors_to_rgb("rgba(0,0,0,0.7)"), Ok([0, 0, 0]));
        assert_eq!(css_colors_to_rgb("rgba(12, 34, 56, 1)"), Ok([12, 34, 56]));
    }

    #[test]
    fn css_malformed_is_error() {
        let err = css_colors_to_rgb("not a color").unwrap_err();
        assert_eq!(err, ColorFormatError::Css("not a color".to_string()));
        assert!(err.to_string().contains("not a color"));
    }

    #[test]
    fn css_hsl_string_is_error() {
        assert!(css_colors_to_rgb("hsl(120, 50%, 50%)").is_err());
    }

    #[test]
    fn css_out_of_range_channel_saturates() {
        assert_eq!(css_colors_to_rgb("rgb(999, 0, 0)"), Ok([255, 0, 0]));
    }
}
