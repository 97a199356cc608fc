//! Extension and language name tables.

use std::collections::HashMap;

/// Built-in file extension to language mapping.
pub const EXTENSIONS: &[(&str, &str)] = &[
    (".py", "python"),
    (".sh", "shell"),
    (".bash", "shell"),
    (".rst", "rst"),
    (".yaml", "yaml"),
    (".html", "html"),
    (".diff", "diff"),
    (".log", "text"),
    (".conf", "conf"),
];

/// Language names accepted verbatim.
pub const LANGUAGE_NAMES: &[&str] = &[
    "python", "shell", "rst", "yaml", "html", "diff", "text", "conf", "bash",
];

/// A resolved code block language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Name to put after `.. code::`
    pub name: String,
    /// Whether the tag was found in the tables
    pub known: bool,
}

/// Lookup table for code block languages.
///
/// Starts from [`EXTENSIONS`] and [`LANGUAGE_NAMES`]; user entries can be
/// layered on top with [`LanguageTable::with_overrides`].
#[derive(Debug, Clone)]
pub struct LanguageTable {
    extensions: HashMap<String, String>,
    names: HashMap<String, String>,
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTable {
    /// Create a table holding the built-in entries.
    pub fn new() -> Self {
        let extensions = EXTENSIONS
            .iter()
            .map(|(ext, lang)| (ext.to_string(), lang.to_string()))
            .collect();
        let names = LANGUAGE_NAMES
            .iter()
            .map(|name| (name.to_string(), name.to_string()))
            .collect();
        Self { extensions, names }
    }

    /// Add or replace entries.
    ///
    /// Keys starting with `.` are extensions, other keys are language
    /// names (aliases). Later entries win over built-in ones.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (key, lang) in overrides {
            if key.starts_with('.') {
                self.extensions.insert(key.clone(), lang.clone());
            } else {
                self.names.insert(key.clone(), lang.clone());
            }
        }
        self
    }

    /// Resolve a `code:` tag.
    pub fn resolve(&self, tag: &str) -> Language {
        if let Some(lang) = self.by_extension(tag) {
            return Language {
                name: lang.to_string(),
                known: true,
            };
        }

        if let Some(lang) = self.names.get(tag) {
            return Language {
                name: lang.clone(),
                known: true,
            };
        }

        log::warn!("unknown code language {:?}, using it verbatim", tag);
        Language {
            name: tag.to_string(),
            known: false,
        }
    }

    fn by_extension(&self, tag: &str) -> Option<&str> {
        let dot = tag.rfind('.')?;
        self.extensions.get(&tag[dot..]).map(String::as_str)
    }
}
