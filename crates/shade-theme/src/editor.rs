//! Editor styling — maps a theme's palette to concrete style rules.
//!
//! The palette's order is its meaning: entry 0 drives the editor chrome
//! (caret, selection, gutter), entries 1..15 color the syntax token roles.
//! Alpha variants of entry 0 come from `hsl_to_hsla`, so the selection and
//! gutter read as translucent washes of the caret color.

use shade_color::hsl_to_hsla;

use crate::themes::ThemeDefinition;

/// Used when a palette is too short or an entry fails alpha conversion.
/// A generated palette never triggers it; hand-built ones might.
const FALLBACK_COLOR: &str = "hsl(0, 0%, 100%)";

/// Styling for one syntax token role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// `None` means the role only changes the font style, not the color.
    pub color: Option<String>,
    pub italic: bool,
    pub bold: bool,
}

impl StyleRule {
    fn color(color: &str) -> Self {
        Self { color: Some(color.to_string()), italic: false, bold: false }
    }

    fn color_italic(color: &str) -> Self {
        Self { color: Some(color.to_string()), italic: true, bold: false }
    }

    fn color_bold(color: &str) -> Self {
        Self { color: Some(color.to_string()), italic: false, bold: true }
    }
}

/// The complete set of editor styling rules for one theme.
///
/// Chrome fields are plain color strings; token fields carry font flags
/// too. Everything is derived positionally from the 15-entry palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorStyles {
    // ── Chrome ────────────────────────────────────────────────
    pub caret: String,
    pub selection: String,
    pub selection_match: String,
    pub gutter_foreground: String,

    // ── Font-only roles ───────────────────────────────────────
    pub emphasis: StyleRule,
    pub strong: StyleRule,

    // ── Token roles ───────────────────────────────────────────
    pub links: StyleRule,
    pub comments: StyleRule,
    pub brackets: StyleRule,
    pub variables: StyleRule,
    pub property_names: StyleRule,
    pub variable_definitions: StyleRule,
    pub property_definitions: StyleRule,
    pub keywords: StyleRule,
    pub type_names: StyleRule,
    pub operators: StyleRule,
    pub literals: StyleRule,
    pub class_names: StyleRule,
    pub regexps: StyleRule,
    pub tag_names: StyleRule,
    pub attribute_values: StyleRule,
    pub attribute_names: StyleRule,
    pub headings: StyleRule,
    pub quotes: StyleRule,
}

impl EditorStyles {
    /// Build the styling rules for a catalog theme.
    #[must_use]
    pub fn for_theme(theme: &ThemeDefinition) -> Self {
        Self::from_palette(&theme.palette)
    }

    /// Build styling rules from a 15-entry palette.
    ///
    /// Short palettes degrade to the fallback color per missing entry
    /// rather than failing — same policy as the rest of the pipeline.
    #[must_use]
    pub fn from_palette(palette: &[String]) -> Self {
        let role = |index: usize| -> &str {
            palette.get(index).map_or(FALLBACK_COLOR, String::as_str)
        };
        let alpha_role = |index: usize, alpha: f64| -> String {
            let color = role(index);
            hsl_to_hsla(color, alpha).unwrap_or_else(|_| color.to_string())
        };

        Self {
            caret: role(0).to_string(),
            selection: alpha_role(0, 0.1),
            selection_match: alpha_role(0, 0.2),
            gutter_foreground: alpha_role(0, 0.4),

            emphasis: StyleRule { color: None, italic: true, bold: false },
            strong: StyleRule { color: None, italic: false, bold: true },

            links: StyleRule::color(role(1)),
            comments: StyleRule { color: Some(alpha_role(0, 0.4)), italic: true, bold: false },
            brackets: StyleRule::color(role(0)),
            variables: StyleRule::color_italic(role(5)),
            property_names: StyleRule::color_italic(role(5)),
            variable_definitions: StyleRule::color(role(10)),
            property_definitions: StyleRule::color(role(8)),
            keywords: StyleRule::color(role(1)),
            type_names: StyleRule::color(role(13)),
            operators: StyleRule::color(role(6)),
            literals: StyleRule::color(role(2)),
            class_names: StyleRule::color(role(8)),
            regexps: StyleRule::color(role(12)),
            tag_names: StyleRule::color(role(11)),
            attribute_values: StyleRule::color(role(2)),
            attribute_names: StyleRule::color(role(6)),
            headings: StyleRule::color_bold(role(1)),
            quotes: StyleRule::color(role(6)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
