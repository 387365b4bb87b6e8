//! A tagged option type for settings pickers.
//!
//! Each picker in the settings panel chooses from one of the four catalogs.
//! Dispatch is an exhaustive match on the variant — adding a catalog means
//! the compiler points at every place that must handle it.

use crate::fonts::FontDefinition;
use crate::languages::LanguageDefinition;
use crate::themes::{ChoiceDefinition, ThemeDefinition};

/// One selectable entry from any of the catalogs.
#[derive(Debug, Clone, Copy)]
pub enum SelectOption<'a> {
    Language(&'a LanguageDefinition),
    Theme(&'a ThemeDefinition),
    Font(&'a FontDefinition),
    Choice(&'a ChoiceDefinition),
}

impl SelectOption<'_> {
    /// The stable identifier of the underlying catalog entry.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Language(lang) => lang.id.as_str(),
            Self::Theme(theme) => theme.id,
            Self::Font(font) => font.id,
            Self::Choice(choice) => choice.id,
        }
    }

    /// The display label shown in the picker.
    #[must_use]
    pub const fn label(&self) -> &str {
        match self {
            Self::Language(lang) => lang.label,
            Self::Theme(theme) => theme.label,
            Self::Font(font) => font.label,
            Self::Choice(choice) => choice.label,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
