//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the optional notation features.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Render `[* text]` spans inside a line as `**text**`.
    /// Default: false (they are treated as internal page links)
    #[serde(default)]
    pub strong: bool,
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// Flags are plain booleans with no "unset" state, so every value is
    /// copied from `other`.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.strong = other.strong;
    }
}
