//! WCAG relative luminance and contrast ratios.
//!
//! The palette generator corrects every candidate color until it reads
//! clearly against the reference background, using the WCAG 2.1 contrast
//! formula: `(L_lighter + 0.05) / (L_darker + 0.05)`.
//!
//! A second, divergent ratio ([`luminance_ratio`]) offsets both luminances
//! by 0.5 instead of 0.05. Its output range is compressed toward 1 (white
//! on black yields 3.0, not 21.0). The two functions are intentionally kept
//! separate — see DESIGN.md.

/// Relative luminance of an RGB color per WCAG 2.1.
///
/// Per-channel sRGB gamma decode (`c/255`, then the piecewise linearization
/// with the 0.03928 knee) combined with the standard weights:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    let lin = |c: u8| -> f64 {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126f64.mul_add(lin(r), 0.7152f64.mul_add(lin(g), 0.0722 * lin(b)))
}

/// WCAG 2.1 contrast ratio between two RGB colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)` — in [1.0, 21.0], symmetric in
/// its arguments. This is the form the palette generator's contrast
/// correction uses.
#[must_use]
pub fn contrast_ratio(a: [u8; 3], b: [u8; 3]) -> f64 {
    let la = luminance(a[0], a[1], a[2]);
    let lb = luminance(b[0], b[1], b[2]);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Luminance ratio with a 0.5 offset on both terms.
///
/// Note: this uses +0.5 where [`contrast_ratio`] uses the WCAG +0.05, so
/// its range tops out near 3 instead of 21. Preserved as an independent
/// function; the palette generator does not call it.
#[must_use]
pub fn luminance_ratio(a: [u8; 3], b: [u8; 3]) -> f64 {
    let la = luminance(a[0], a[1], a[2]);
    let lb = luminance(b[0], b[1], b[2]);
    if la > lb {
        (la + 0.5) / (lb + 0.5)
    } else {
        (lb + 0.5) / (la + 0.5)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
