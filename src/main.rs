// SPDX-License-Identifier: MIT
//
// snipshade — gradient theme engine for styled code snippets.
//
// This is the main binary that wires together the crates:
//
//   shade-color → palette generation (conversion, contrast, hue math)
//   shade-theme → theme/font/language catalogs, editor style mapping
//
// `snipshade --list` prints the theme catalog; `snipshade <theme-id>`
// previews one theme: its gradient seed stops, the 15 generated palette
// entries as truecolor swatches, and the editor roles each entry drives.

use std::env;
use std::process;

use shade_theme::EditorStyles;
use shade_theme::themes::{self, ThemeDefinition};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("--help" | "-h") => print_usage(),
        Some("--list" | "-l") => print_catalog(),
        Some(flag) if flag.starts_with('-') => {
            eprintln!("snipshade: unknown flag: {flag}");
            process::exit(2);
        }
        Some(id) => match themes::theme(id) {
            Some(theme) => print_theme(theme),
            None => {
                eprintln!("snipshade: unknown theme: {id} (try --list)");
                process::exit(1);
            }
        },
    }
}

fn print_usage() {
    println!("usage: snipshade [--list] [theme-id]");
    println!();
    println!("  --list, -l    list the theme catalog");
    println!("  theme-id      preview one theme's palette and editor roles");
}

fn print_catalog() {
    for theme in themes::themes() {
        println!(
            "{:<12} {:<12} {} \u{2192} {}",
            theme.id, theme.label, theme.seeds[0], theme.seeds[1]
        );
    }
}

fn print_theme(theme: &ThemeDefinition) {
    println!("{} \u{2014} {}", theme.id, theme.label);
    println!("gradient: {} \u{2192} {}", theme.seeds[0], theme.seeds[1]);
    println!();

    println!("palette:");
    for (i, entry) in theme.palette.iter().enumerate() {
        println!("  {i:>2}  {}  {entry}", swatch(entry));
    }
    println!();

    let styles = EditorStyles::for_theme(theme);
    println!("editor roles:");
    print_role("caret", &styles.caret);
    print_role("selection", &styles.selection);
    print_role("gutter", &styles.gutter_foreground);
    for (name, rule) in [
        ("keywords", &styles.keywords),
        ("literals", &styles.literals),
        ("comments", &styles.comments),
        ("variables", &styles.variables),
        ("operators", &styles.operators),
        ("class names", &styles.class_names),
        ("var defs", &styles.variable_definitions),
        ("tag names", &styles.tag_names),
        ("regexps", &styles.regexps),
        ("type names", &styles.type_names),
        ("headings", &styles.headings),
    ] {
        if let Some(color) = &rule.color {
            print_role(name, color);
        }
    }
}

fn print_role(name: &str, color: &str) {
    println!("  {name:<12} {}  {color}", swatch(color));
}

/// A two-cell truecolor block for the given HSL/HSLA string, or blank
/// cells if it can't be parsed. Alpha is ignored for preview purposes.
fn swatch(color: &str) -> String {
    hsl_components(color).map_or_else(
        || "  ".to_string(),
        |(h, s, l)| {
            let (r, g, b) = hsl_to_rgb(h, s, l);
            format!("\x1b[48;2;{r};{g};{b}m  \x1b[0m")
        },
    )
}

/// Pull (hue, saturation, lightness) out of an `hsl(...)` / `hsla(...)`
/// string. Presentation-only parsing — the color crate owns validation.
fn hsl_components(color: &str) -> Option<(f64, f64, f64)> {
    let trimmed = color.trim();
    let inner = trimmed
        .strip_prefix("hsla(")
        .or_else(|| trimmed.strip_prefix("hsl("))?
        .strip_suffix(')')?;

    let mut fields = inner.split(',').map(str::trim);
    let h = fields.next()?.parse::<f64>().ok()?;
    let s = fields.next()?.strip_suffix('%')?.parse::<f64>().ok()?;
    let l = fields.next()?.strip_suffix('%')?.parse::<f64>().ok()?;
    Some((h, s / 100.0, l / 100.0))
}

/// Standard HSL → RGB conversion for terminal swatches.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
