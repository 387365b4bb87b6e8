//! Palette generation — from gradient seeds to a 15-entry syntax palette.
//!
//! [`generate_colors`] is the whole pipeline:
//!
//! 1. Average the seed colors in RGB (integer floor).
//! 2. Derive five candidates by fixed per-channel offsets from the mean.
//! 3. Scale any candidate whose contrast against the reference background
//!    falls below 7:1.
//! 4. Convert to HSL and remap saturation/lightness positionally (a base
//!    remap, then the final one — the base remap's s/l values are
//!    intermediate and get overwritten).
//! 5. Hue-shift the five adjusted colors by −45° and +45° for ten variants.
//!
//! Output order is the contract: adjusted (5) then all −45° (5) then all
//! +45° (5). Consumers pick colors by index, never by name.

use std::sync::LazyLock;

use regex::Regex;

use crate::contrast::contrast_ratio;
use crate::convert::{ColorFormatError, css_colors_to_rgb, hex_to_rgb, rgb_to_hex, rgb_to_hsl};

// ─── Pipeline constants ──────────────────────────────────────────────────────

/// Per-channel offsets deriving the five candidates from the seed mean.
const CANDIDATE_OFFSETS: [[i32; 3]; 5] = [
    [20, -20, -20],
    [-20, 20, 20],
    [10, 10, -30],
    [-30, -10, 10],
    [20, -10, 20],
];

/// The background every candidate must stay readable against.
/// Alpha is parsed and discarded — correction runs against opaque black.
const REFERENCE_BACKGROUND: &str = "rgba(0,0,0,0.7)";

/// Minimum acceptable contrast ratio against the reference background.
const MIN_CONTRAST_RATIO: f64 = 7.0;

/// Base saturation/lightness remap applied during HSL conversion.
/// Intermediate values — the final remap overwrites them (hue survives).
const BASE_SATURATIONS: [u8; 5] = [70, 80, 90, 100, 30];
const BASE_LIGHTNESSES: [u8; 5] = [90, 80, 65, 50, 40];

/// Final saturation/lightness remap producing the five adjusted entries.
const FINAL_SATURATIONS: [u8; 5] = [100, 93, 98, 100, 91];
const FINAL_LIGHTNESSES: [u8; 5] = [90, 80, 70, 60, 50];

/// Hue rotations for the shifted variants, in emission order.
const SHIFT_DEGREES: [i64; 2] = [-45, 45];

/// Lenient HSL matcher for internally generated strings — tolerates
/// arbitrary whitespace around the three fields.
static LENIENT_HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"hsl\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*\)").expect("hsl pattern compiles")
});

/// Strict HSL matcher for [`hsl_to_hsla`] — anchored, no slack beyond a
/// single optional space after each comma. Deliberately stricter than
/// [`LENIENT_HSL`]; external callers get validation, internal plumbing
/// gets tolerance.
static STRICT_HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\((\d+),\s*([\d.]+)%,\s*([\d.]+)%\)$").expect("hsl pattern compiles")
});

// ─── Palette generation ──────────────────────────────────────────────────────

/// Generate the 15-entry HSL palette from a list of seed hex colors.
///
/// Deterministic and pure: the same seed list always produces the same
/// palette. Malformed seeds count as black (see
/// [`hex_to_rgb`](crate::convert::hex_to_rgb)); an empty seed list averages
/// to black. Every entry serializes as `hsl(h, s%, l%)`.
#[must_use]
pub fn generate_colors(seeds: &[&str]) -> Vec<String> {
    // The reference literal always parses; black is the value either way.
    let reference = css_colors_to_rgb(REFERENCE_BACKGROUND).unwrap_or([0, 0, 0]);

    let mean = seed_mean(seeds);

    let candidates: Vec<String> = CANDIDATE_OFFSETS
        .iter()
        .map(|offset| {
            rgb_to_hex(
                mean[0] + offset[0],
                mean[1] + offset[1],
                mean[2] + offset[2],
            )
        })
        .collect();

    let corrected: Vec<String> = candidates
        .iter()
        .map(|hex| correct_contrast(hex, reference))
        .collect();

    let adjusted = modify_colors(
        &convert_to_hsl(&corrected),
        &FINAL_SATURATIONS,
        &FINAL_LIGHTNESSES,
    );

    let shifted = shift_hue(&adjusted);

    let mut palette = adjusted;
    palette.extend(shifted);
    palette
}

/// Integer mean of the seed colors' RGB channels (floor division).
fn seed_mean(seeds: &[&str]) -> [i32; 3] {
    if seeds.is_empty() {
        return [0, 0, 0];
    }

    let mut total = [0i64; 3];
    for seed in seeds {
        let [r, g, b] = hex_to_rgb(seed);
        total[0] += i64::from(r);
        total[1] += i64::from(g);
        total[2] += i64::from(b);
    }

    let count = seeds.len() as i64;
    [
        (total[0] / count) as i32,
        (total[1] / count) as i32,
        (total[2] / count) as i32,
    ]
}

/// Scale a candidate's channels up to meet the minimum contrast ratio.
///
/// Candidates already at or above 7:1 pass through unchanged. Below that,
/// all three channels scale uniformly by `7.05 / ratio` (then round and
/// clamp), preserving the candidate's hue while pushing it brighter.
fn correct_contrast(hex: &str, reference: [u8; 3]) -> String {
    let rgb = hex_to_rgb(hex);
    let ratio = contrast_ratio(rgb, reference);

    if ratio >= MIN_CONTRAST_RATIO {
        return hex.to_string();
    }

    let factor = (MIN_CONTRAST_RATIO + 0.05) / ratio;
    let scale = |c: u8| -> i32 { (f64::from(c) * factor).round() as i32 };
    rgb_to_hex(scale(rgb[0]), scale(rgb[1]), scale(rgb[2]))
}

/// Convert hex colors to HSL strings with the base saturation/lightness
/// remap applied positionally.
///
/// The remapped s/l values are a pass-through intermediate — callers apply
/// the final remap on top, so only the hue computed here is user-visible.
#[must_use]
pub fn convert_to_hsl(colors: &[String]) -> Vec<String> {
    let hsl: Vec<String> = colors
        .iter()
        .map(|hex| rgb_to_hsl(hex_to_rgb(hex)))
        .collect();

    modify_colors(&hsl, &BASE_SATURATIONS, &BASE_LIGHTNESSES)
}

/// Replace each color's saturation and lightness with the positionally
/// corresponding values, keeping its hue.
///
/// Malformed entries are skipped with a logged error — a bad entry drops
/// out of the batch rather than aborting it.
#[must_use]
pub fn modify_colors(colors: &[String], saturations: &[u8], lightnesses: &[u8]) -> Vec<String> {
    let mut modified = Vec::with_capacity(colors.len());

    for ((color, s), l) in colors.iter().zip(saturations).zip(lightnesses) {
        if let Some(caps) = LENIENT_HSL.captures(color) {
            let hue = &caps[1];
            modified.push(format!("hsl({hue}, {s}%, {l}%)"));
        } else {
            tracing::error!("invalid HSL format: {color}");
        }
    }

    modified
}

/// Rotate each color's hue by −45° and +45°, holding saturation and
/// lightness constant.
///
/// Emits all −45° variants first, then all +45°. The rotation uses a true
/// mathematical modulo (`rem_euclid`) so a negative intermediate hue can
/// never leak into the output. Malformed entries are skipped with a logged
/// error, like [`modify_colors`].
#[must_use]
pub fn shift_hue(colors: &[String]) -> Vec<String> {
    let mut shifted = Vec::with_capacity(colors.len() * SHIFT_DEGREES.len());

    for degree in SHIFT_DEGREES {
        for color in colors {
            let Some(caps) = LENIENT_HSL.captures(color) else {
                tracing::error!("invalid HSL format: {color}");
                continue;
            };
            let Ok(hue) = caps[1].parse::<i64>() else {
                tracing::error!("invalid HSL format: {color}");
                continue;
            };

            let s = &caps[2];
            let l = &caps[3];
            let shifted_hue = (hue + degree).rem_euclid(360);
            shifted.push(format!("hsl({shifted_hue}, {s}%, {l}%)"));
        }
    }

    shifted
}

// ─── HSL → HSLA ──────────────────────────────────────────────────────────────

/// Add an alpha channel to an `hsl(h, s%, l%)` string, producing
/// `hsla(h, s%, l%, a)`. Alpha is clamped to [0, 1].
///
/// Validation is strict: the input must match the three-field HSL form
/// exactly, anchored at both ends. This is the external counterpart to the
/// lenient matcher used for internally generated strings.
///
/// # Errors
///
/// Returns [`ColorFormatError::Hsl`] if the string does not match.
pub fn hsl_to_hsla(color: &str, alpha: f64) -> Result<String, ColorFormatError> {
    let caps = STRICT_HSL
        .captures(color)
        .ok_or_else(|| ColorFormatError::Hsl(color.to_string()))?;

    let h = int_prefix(&caps[1]);
    let s = int_prefix(&caps[2]);
    let l = int_prefix(&caps[3]);
    let alpha = alpha.clamp(0.0, 1.0);

    Ok(format!("hsla({h}, {s}%, {l}%, {alpha})"))
}

/// Integer prefix of a decimal field: `"12.5"` → 12. The strict pattern
/// admits fractional saturation/lightness; the output keeps whole percents.
fn int_prefix(field: &str) -> u32 {
    field
        .split('.')
        .next()
        .unwrap_or("")
        .parse()
        .unwrap_or(0)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static HSL_SHAPE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^hsl\(\d+, \d+%, \d+%\)$").unwrap());

    fn parse_hsl(color: &str) -> (i64, u8, u8) {
        let caps = LENIENT_HSL.captures(color).expect("parseable hsl");
        (
            caps[1].parse().unwrap(),
            caps[2].parse().unwrap(),
            caps[3].parse().unwrap(),
        )
    }

    fn owned(colors: &[&str]) -> Vec<String> {
        colors.iter().map(|c| (*c).to_string()).collect()
    }

    // ── generate_colors ─────────────────────────────────────────────

    #[test]
    fn palette_has_fifteen_entries() {
        let palette = generate_colors(&["#38bdf8", "#3b82f6"]);
        assert_eq!(palette.len(), 15);
    }

    #[test]
    fn palette_entries_are_well_formed() {
        for entry in generate_colors(&["#fb923c", "#ec4899"]) {
            assert!(HSL_SHAPE.is_match(&entry), "malformed entry: {entry}");
        }
    }

    #[test]
    fn palette_is_deterministic() {
        let seeds = ["#22c55e", "#2dd4bf"];
        assert_eq!(generate_colors(&seeds), generate_colors(&seeds));
    }

    #[test]
    fn empty_seed_list_still_yields_full_palette() {
        let palette = generate_colors(&[]);
        assert_eq!(palette.len(), 15);
    }

    #[test]
    fn malformed_seeds_count_as_black() {
        assert_eq!(generate_colors(&["nonsense"]), generate_colors(&["#000000"]));
    }

    #[test]
    fn adjusted_entries_carry_final_remap() {
        let palette = generate_colors(&["#a78bfa", "#8b5cf6"]);
        for (i, entry) in palette.iter().take(5).enumerate() {
            let (_, s, l) = parse_hsl(entry);
            assert_eq!(s, FINAL_SATURATIONS[i], "saturation of entry {i}");
            assert_eq!(l, FINAL_LIGHTNESSES[i], "lightness of entry {i}");
        }
    }

    #[test]
    fn shifted_entries_rotate_adjusted_hues() {
        let palette = generate_colors(&["#3b82f6", "#14b8a6"]);
        for i in 0..5 {
            let (h, s, l) = parse_hsl(&palette[i]);
            let (h_minus, s_minus, l_minus) = parse_hsl(&palette[5 + i]);
            let (h_plus, s_plus, l_plus) = parse_hsl(&palette[10 + i]);

            assert_eq!(h_minus, (h - 45).rem_euclid(360), "entry {i} at -45");
            assert_eq!(h_plus, (h + 45).rem_euclid(360), "entry {i} at +45");
            assert_eq!((s_minus, l_minus), (s, l));
            assert_eq!((s_plus, l_plus), (s, l));
        }
    }

    #[test]
    fn hues_stay_in_circle() {
        for entry in generate_colors(&["#facc15", "#f97316"]) {
            let (h, _, _) = parse_hsl(&entry);
            assert!((0..=360).contains(&h), "hue out of range in {entry}");
        }
    }

    #[test]
    fn dark_seeds_get_contrast_corrected() {
        // Near-black seeds force every candidate below 7:1 against the
        // reference, so the correction path must engage; the palette still
        // comes out fully formed.
        let palette = generate_colors(&["#111827", "#1f2937"]);
        assert_eq!(palette.len(), 15);
    }

    #[test]
    fn reference_background_parses_to_black() {
        assert_eq!(css_colors_to_rgb(REFERENCE_BACKGROUND), Ok([0, 0, 0]));
    }

    // ── convert_to_hsl / modify_colors ──────────────────────────────

    #[test]
    fn convert_applies_base_remap() {
        let hsl = convert_to_hsl(&owned(&["#ff0000", "#00ff00"]));
        assert_eq!(hsl, vec!["hsl(0, 70%, 90%)", "hsl(120, 80%, 80%)"]);
    }

    #[test]
    fn modify_keeps_hue_replaces_rest() {
        let out = modify_colors(
            &owned(&["hsl(120, 50%, 50%)", "hsl(240, 60%, 60%)"]),
            &[70, 80],
            &[40, 50],
        );
        assert_eq!(out, vec!["hsl(120, 70%, 40%)", "hsl(240, 80%, 50%)"]);
    }

    #[test]
    fn modify_skips_malformed_entries() {
        let out = modify_colors(
            &owned(&["hsl(120, 50%, 50%)", "#not-hsl"]),
            &[70, 80],
            &[40, 50],
        );
        assert_eq!(out, vec!["hsl(120, 70%, 40%)"]);
    }

    #[test]
    fn modify_tolerates_loose_whitespace() {
        let out = modify_colors(&owned(&["hsl( 120 , 50% , 50% )"]), &[75], &[45]);
        assert_eq!(out, vec!["hsl(120, 75%, 45%)"]);
    }

    // ── shift_hue ───────────────────────────────────────────────────

    #[test]
    fn shift_emits_minus_then_plus() {
        let out = shift_hue(&owned(&["hsl(100, 50%, 50%)", "hsl(200, 40%, 60%)"]));
        assert_eq!(
            out,
            vec![
                "hsl(55, 50%, 50%)",
                "hsl(155, 40%, 60%)",
                "hsl(145, 50%, 50%)",
                "hsl(245, 40%, 60%)",
            ]
        );
    }

    #[test]
    fn shift_never_leaks_negative_hues() {
        // 10 - 45 would be -35 without a true mathematical modulo.
        let out = shift_hue(&owned(&["hsl(10, 50%, 50%)"]));
        assert_eq!(out, vec!["hsl(325, 50%, 50%)", "hsl(55, 50%, 50%)"]);
    }

    #[test]
    fn shift_wraps_past_360() {
        let out = shift_hue(&owned(&["hsl(350, 10%, 10%)"]));
        assert_eq!(out, vec!["hsl(305, 10%, 10%)", "hsl(35, 10%, 10%)"]);
    }

    #[test]
    fn shift_accepts_unspaced_input() {
        let out = shift_hue(&owned(&["hsl(10,50%,50%)"]));
        assert_eq!(out, vec!["hsl(325, 50%, 50%)", "hsl(55, 50%, 50%)"]);
    }

    #[test]
    fn shift_skips_malformed_entries() {
        let out = shift_hue(&owned(&["hsl(10, 50%, 50%)", "oops"]));
        assert_eq!(out.len(), 2);
    }

    // ── hsl_to_hsla ─────────────────────────────────────────────────

    #[test]
    fn hsla_appends_alpha() {
        assert_eq!(
            hsl_to_hsla("hsl(120, 50%, 50%)", 0.4),
            Ok("hsla(120, 50%, 50%, 0.4)".to_string())
        );
    }

    #[test]
    fn hsla_clamps_alpha_high() {
        assert_eq!(
            hsl_to_hsla("hsl(120, 50%, 50%)", 1.5),
            Ok("hsla(120, 50%, 50%, 1)".to_string())
        );
    }

    #[test]
    fn hsla_clamps_alpha_low() {
        assert_eq!(
            hsl_to_hsla("hsl(120, 50%, 50%)", -0.5),
            Ok("hsla(120, 50%, 50%, 0)".to_string())
        );
    }

    #[test]
    fn hsla_truncates_fractional_fields() {
        assert_eq!(
            hsl_to_hsla("hsl(120, 50.5%, 49.9%)", 1.0),
            Ok("hsla(120, 50%, 49%, 1)".to_string())
        );
    }

    #[test]
    fn hsla_rejects_leading_slack() {
        assert!(hsl_to_hsla(" hsl(120, 50%, 50%)", 1.0).is_err());
    }

    #[test]
    fn hsla_rejects_trailing_slack() {
        assert!(hsl_to_hsla("hsl(120, 50%, 50%) ", 1.0).is_err());
    }

    #[test]
    fn hsla_rejects_four_fields() {
        assert!(hsl_to_hsla("hsl(120, 50%, 50%, 1)", 1.0).is_err());
    }

    #[test]
    fn hsla_error_carries_input() {
        let err = hsl_to_hsla("nope", 1.0).unwrap_err();
        assert_eq!(err, ColorFormatError::Hsl("nope".to_string()));
    }

    #[test]
    fn strict_rejects_what_lenient_accepts() {
        // The asymmetry is intentional: internal strings get tolerance,
        // external input gets validation.
        let loose = "hsl( 120 , 50% , 50% )";
        assert!(LENIENT_HSL.is_match(loose));
        assert!(hsl_to_hsla(loose, 1.0).is_err());
    }
}
