//! Gradient theme catalog — named seed pairs and their derived palettes.
//!
//! Each theme is a two-stop gradient; the stops double as the seed colors
//! for palette generation. Palettes are derived once, on first access, and
//! the whole table is immutable from then on.

use std::sync::LazyLock;

use shade_color::generate_colors;

/// A named gradient theme with its derived syntax palette.
#[derive(Debug, Clone)]
pub struct ThemeDefinition {
    /// Stable identifier used by settings and the CLI (e.g., "sunset").
    pub id: &'static str,
    /// Human-readable name for pickers.
    pub label: &'static str,
    /// The gradient stops, start to end — also the palette seeds.
    pub seeds: [&'static str; 2],
    /// The 15-entry HSL palette derived from the seeds. Index is semantic:
    /// consumers assign roles positionally (see [`crate::editor`]).
    pub palette: Vec<String>,
}

/// A padding choice for the snippet frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceDefinition {
    pub id: &'static str,
    pub label: &'static str,
    /// Frame padding in pixels.
    pub padding_px: u8,
}

const THEME_SEEDS: [(&str, &str, [&str; 2]); 20] = [
    ("sky", "Sky Color", ["#38bdf8", "#3b82f6"]),
    ("sunset", "Sunset", ["#fb923c", "#ec4899"]),
    ("forest", "Forest", ["#22c55e", "#2dd4bf"]),
    ("lavender", "Lavender", ["#a78bfa", "#8b5cf6"]),
    ("ocean", "Ocean", ["#3b82f6", "#14b8a6"]),
    ("peach", "Peach", ["#f9a8d4", "#fdba74"]),
    ("midnight", "Midnight", ["#374151", "#111827"]),
    ("flamingo", "Flamingo", ["#fb7185", "#ec4899"]),
    ("mint", "Mint", ["#5eead4", "#4ade80"]),
    ("citrus", "Citrus", ["#facc15", "#f97316"]),
    ("aqua", "Aqua", ["#22d3ee", "#60a5fa"]),
    ("berry", "Berry", ["#9333ea", "#db2777"]),
    ("sand", "Sand", ["#fde68a", "#fbbf24"]),
    ("grape", "Grape", ["#8b5cf6", "#6366f1"]),
    ("tropical", "Tropical", ["#a3e635", "#fde047"]),
    ("blush", "Blush", ["#f9a8d4", "#fb7185"]),
    ("sunrise", "Sunrise", ["#f87171", "#fb923c"]),
    ("cool", "Cool", ["#93c5fd", "#67e8f9"]),
    ("rosewood", "Rosewood", ["#f43f5e", "#ef4444"]),
    ("charcoal", "Charcoal", ["#4b5563", "#1f2937"]),
];

static THEMES: LazyLock<Vec<ThemeDefinition>> = LazyLock::new(|| {
    THEME_SEEDS
        .iter()
        .map(|(id, label, seeds)| ThemeDefinition {
            id,
            label,
            seeds: *seeds,
            palette: generate_colors(seeds),
        })
        .collect()
});

/// All supported themes, in catalog order.
#[must_use]
pub fn themes() -> &'static [ThemeDefinition] {
    &THEMES
}

/// Look up a theme by id. Returns `None` if the id is not recognized.
#[must_use]
pub fn theme(id: &str) -> Option<&'static ThemeDefinition> {
    THEMES.iter().find(|t| t.id == id)
}

/// The supported frame padding choices.
pub const PADDING_CHOICES: [ChoiceDefinition; 4] = [
    ChoiceDefinition { id: "small", label: "16", padding_px: 16 },
    ChoiceDefinition { id: "medium", label: "20", padding_px: 20 },
    ChoiceDefinition { id: "large", label: "24", padding_px: 24 },
    ChoiceDefinition { id: "extra-large", label: "28", padding_px: 28 },
];

/// Look up a padding choice by id.
#[must_use]
pub fn padding_choice(id: &str) -> Option<&'static ChoiceDefinition> {
    PADDING_CHOICES.iter().find(|c| c.id == id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
