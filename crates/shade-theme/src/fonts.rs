//! Font catalog for the snippet frame.

/// A font the snippet frame can render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontDefinition {
    pub id: &'static str,
    pub label: &'static str,
    /// Concrete font family name.
    pub family: &'static str,
}

/// The supported fonts, in catalog order.
pub const FONTS: [FontDefinition; 5] = [
    FontDefinition { id: "cousine", label: "cousine", family: "Cousine" },
    FontDefinition { id: "nunito", label: "nunito", family: "Nunito" },
    FontDefinition { id: "spaceMono", label: "spaceMono", family: "Space Mono" },
    FontDefinition { id: "oxygenMono", label: "oxygenMono", family: "Oxygen Mono" },
    FontDefinition { id: "lato", label: "lato", family: "Lato" },
];

/// Look up a font by id. Returns `None` if the id is not recognized.
#[must_use]
pub fn font(id: &str) -> Option<&'static FontDefinition> {
    FONTS.iter().find(|f| f.id == id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
