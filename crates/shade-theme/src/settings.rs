//! Current picker selections — theme, language, font, padding, gutter.
//!
//! Settings are plain in-process state. Setters validate ids against the
//! catalogs and leave the selection untouched on unknown ids, so the frame
//! always renders with a valid configuration.

use crate::fonts::{self, FontDefinition};
use crate::languages::LanguageId;
use crate::themes::{self, ChoiceDefinition, ThemeDefinition};

/// The live settings of the snippet frame.
#[derive(Debug, Clone)]
pub struct Settings {
    theme: &'static ThemeDefinition,
    language: LanguageId,
    font: &'static FontDefinition,
    padding: &'static ChoiceDefinition,
    pub line_numbers: bool,
}

impl Settings {
    /// The selected theme.
    #[must_use]
    pub fn theme(&self) -> &'static ThemeDefinition {
        self.theme
    }

    /// The selected language.
    #[must_use]
    pub const fn language(&self) -> LanguageId {
        self.language
    }

    /// The selected font.
    #[must_use]
    pub const fn font(&self) -> &'static FontDefinition {
        self.font
    }

    /// The selected frame padding.
    #[must_use]
    pub const fn padding(&self) -> &'static ChoiceDefinition {
        self.padding
    }

    /// Select a theme by id. Returns `false` (and changes nothing) for
    /// unknown ids.
    pub fn set_theme(&mut self, id: &str) -> bool {
        themes::theme(id).is_some_and(|t| {
            self.theme = t;
            true
        })
    }

    /// Select a language by id.
    pub fn set_language(&mut self, id: &str) -> bool {
        LanguageId::parse(id).is_some_and(|l| {
            self.language = l;
            true
        })
    }

    /// Select a font by id.
    pub fn set_font(&mut self, id: &str) -> bool {
        fonts::font(id).is_some_and(|f| {
            self.font = f;
            true
        })
    }

    /// Select a padding choice by id.
    pub fn set_padding(&mut self, id: &str) -> bool {
        themes::padding_choice(id).is_some_and(|c| {
            self.padding = c;
            true
        })
    }
}

impl Default for Settings {
    /// First entry of each catalog, line numbers on.
    fn default() -> Self {
        Self {
            theme: &themes::themes()[0],
            language: LanguageId::Typescript,
            font: &fonts::FONTS[0],
            padding: &themes::PADDING_CHOICES[0],
            line_numbers: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
