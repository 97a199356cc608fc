//! Conversion settings.

use serde::{Deserialize, Serialize};

/// Settings for the conversion itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConvertConfig {
    /// Base URL for internal page references, e.g. `https://scrapbox.io/proj`.
    /// Empty means "derive it from the page URL".
    #[serde(default)]
    pub base_url: String,
}

impl ConvertConfig {
    /// Merge another ConvertConfig into this one.
    ///
    /// An empty base URL in `other` leaves the current one in place.
    pub fn merge(&mut self, other: &ConvertConfig) {
        if !other.base_url.is_empty() {
            self.base_url = other.base_url.clone();
        }
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        let base = self.base_url.trim();
        (!base.is_empty()).then_some(base)
    }
}
