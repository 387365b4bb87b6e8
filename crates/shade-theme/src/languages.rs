//! Language registry — explicit loading instead of ad-hoc dynamic imports.
//!
//! Every supported language maps to a capability-providing factory. The
//! registry tracks a clear loaded / not-yet-loaded state per entry and
//! resolves factories synchronously, caching the result. Nothing here
//! implements highlighting — an [`Extension`] only describes what the
//! editor widget should enable for the language.

/// A supported snippet language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    Typescript,
    Javascript,
    Java,
    Php,
    Python,
    Rust,
    Go,
    Cpp,
    Css,
    Html,
    Xml,
    Json,
    Sql,
    Markdown,
}

impl LanguageId {
    /// All supported languages, in catalog order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Typescript,
            Self::Javascript,
            Self::Java,
            Self::Php,
            Self::Python,
            Self::Rust,
            Self::Go,
            Self::Cpp,
            Self::Css,
            Self::Html,
            Self::Xml,
            Self::Json,
            Self::Sql,
            Self::Markdown,
        ]
    }

    /// The catalog id string for this language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typescript => "typescript",
            Self::Javascript => "javascript",
            Self::Java => "java",
            Self::Php => "php",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Cpp => "cpp",
            Self::Css => "css",
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Json => "json",
            Self::Sql => "sql",
            Self::Markdown => "markdown",
        }
    }

    /// Parse a catalog id string. Returns `None` for unknown ids.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.as_str() == id)
    }
}

/// Editor capabilities for one language, produced by its factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// Name of the grammar the editor widget should activate.
    pub grammar: &'static str,
    pub jsx: bool,
    pub typescript: bool,
    pub match_closing_tags: bool,
    pub auto_close_tags: bool,
}

impl Extension {
    const fn grammar(name: &'static str) -> Self {
        Self {
            grammar: name,
            jsx: false,
            typescript: false,
            match_closing_tags: false,
            auto_close_tags: false,
        }
    }
}

/// A catalog entry: id, picker label, and the capability factory.
#[derive(Clone, Copy)]
pub struct LanguageDefinition {
    pub id: LanguageId,
    pub label: &'static str,
    loader: fn() -> Extension,
}

impl LanguageDefinition {
    /// Run this language's factory. Prefer [`LanguageRegistry::load`],
    /// which caches the result.
    #[must_use]
    pub fn resolve(&self) -> Extension {
        (self.loader)()
    }
}

impl std::fmt::Debug for LanguageDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageDefinition")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Catalog table. Order matches [`LanguageId::all`]; the registry indexes
/// by discriminant.
pub const LANGUAGES: [LanguageDefinition; 14] = [
    LanguageDefinition {
        id: LanguageId::Typescript,
        label: "typescript",
        loader: || Extension {
            jsx: true,
            typescript: true,
            ..Extension::grammar("javascript")
        },
    },
    LanguageDefinition {
        id: LanguageId::Javascript,
        label: "javascript",
        loader: || Extension {
            jsx: true,
            ..Extension::grammar("javascript")
        },
    },
    LanguageDefinition {
        id: LanguageId::Java,
        label: "java",
        loader: || Extension::grammar("java"),
    },
    LanguageDefinition {
        id: LanguageId::Php,
        label: "php",
        loader: || Extension::grammar("php"),
    },
    LanguageDefinition {
        id: LanguageId::Python,
        label: "python",
        loader: || Extension::grammar("python"),
    },
    LanguageDefinition {
        id: LanguageId::Rust,
        label: "rust",
        loader: || Extension::grammar("rust"),
    },
    LanguageDefinition {
        id: LanguageId::Go,
        label: "go",
        loader: || Extension::grammar("go"),
    },
    LanguageDefinition {
        id: LanguageId::Cpp,
        label: "cpp",
        loader: || Extension::grammar("cpp"),
    },
    LanguageDefinition {
        id: LanguageId::Css,
        label: "css",
        loader: || Extension::grammar("css"),
    },
    LanguageDefinition {
        id: LanguageId::Html,
        label: "html",
        loader: || Extension {
            match_closing_tags: true,
            auto_close_tags: true,
            ..Extension::grammar("html")
        },
    },
    // xml, json and sql fall back to the C++ grammar; dedicated grammars
    // are not wired up yet.
    LanguageDefinition {
        id: LanguageId::Xml,
        label: "xml",
        loader: || Extension::grammar("cpp"),
    },
    LanguageDefinition {
        id: LanguageId::Json,
        label: "json",
        loader: || Extension::grammar("cpp"),
    },
    LanguageDefinition {
        id: LanguageId::Sql,
        label: "sql",
        loader: || Extension::grammar("cpp"),
    },
    LanguageDefinition {
        id: LanguageId::Markdown,
        label: "markdown",
        loader: || Extension::grammar("markdown"),
    },
];

/// Look up a language's catalog entry.
#[must_use]
pub fn definition(id: LanguageId) -> &'static LanguageDefinition {
    &LANGUAGES[id as usize]
}

// ─── Registry ────────────────────────────────────────────────────────────────

/// Load state of one registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loaded(Extension),
}

/// Tracks which language extensions have been resolved.
///
/// Factories run at most once per language; subsequent loads return the
/// cached [`Extension`].
#[derive(Debug)]
pub struct LanguageRegistry {
    states: Vec<LoadState>,
}

impl LanguageRegistry {
    /// A registry with every language in the not-yet-loaded state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: vec![LoadState::NotLoaded; LANGUAGES.len()],
        }
    }

    /// Whether this language's extension has been resolved.
    #[must_use]
    pub fn is_loaded(&self, id: LanguageId) -> bool {
        matches!(self.states[id as usize], LoadState::Loaded(_))
    }

    /// The resolved extension, or `None` if not yet loaded.
    #[must_use]
    pub fn get(&self, id: LanguageId) -> Option<&Extension> {
        match &self.states[id as usize] {
            LoadState::Loaded(ext) => Some(ext),
            LoadState::NotLoaded => None,
        }
    }

    /// Resolve a language's extension, running its factory on first use.
    pub fn load(&mut self, id: LanguageId) -> &Extension {
        if !self.is_loaded(id) {
            self.states[id as usize] = LoadState::Loaded(definition(id).resolve());
        }
        match &self.states[id as usize] {
            LoadState::Loaded(ext) => ext,
            LoadState::NotLoaded => unreachable!("slot populated above"),
        }
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
