//! # shade-theme — static catalogs and editor styling for snipshade
//!
//! Everything the settings UI chooses between lives here as immutable,
//! statically-constructed tables: gradient themes (with their palettes
//! derived once at first access), fonts, padding choices, and the language
//! registry. No table mutates at runtime.
//!
//! [`editor`] is the consumer side: it maps a theme's 15-entry palette to
//! concrete editor styling rules by position.

pub mod editor;
pub mod fonts;
pub mod languages;
pub mod select;
pub mod settings;
pub mod themes;

pub use editor::EditorStyles;
pub use select::SelectOption;
pub use settings::Settings;
pub use themes::ThemeDefinition;
