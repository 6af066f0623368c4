//! Editor configuration, read from an optional `permgrid.toml`.
//!
//! ```toml
//! [ingest]
//! legacy-default-effect = "ALLOW"
//!
//! [preview]
//! unset-label = "NONE"
//!
//! [filter]
//! keyword-case-sensitive = false
//! ```

use crate::error::ConfigError;
use permgrid_matrix::IngestOptions;
use permgrid_types::Effect;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Settings for an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Effect given to snapshot records that list codes without an effect.
    pub legacy_default_effect: Effect,
    /// Label used for `Unset` in rendered change previews.
    pub unset_label: String,
    /// Initial case sensitivity of the keyword filter.
    pub keyword_case_sensitive: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            legacy_default_effect: Effect::Allow,
            unset_label: default_unset_label(),
            keyword_case_sensitive: false,
        }
    }
}

fn default_unset_label() -> String {
    Effect::Unset.label().to_string()
}

impl EditorConfig {
    /// Parses a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: EditorFile = toml::from_str(contents)?;
        Ok(file.into_config())
    }

    /// Reads a config file, failing on I/O or parse errors.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads a config file, falling back to defaults with a warning if it is
    /// missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No editor config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::read_from(path) {
            Ok(config) => {
                info!("Loaded editor config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load editor config {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Ingestion settings derived from this config.
    #[must_use]
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            legacy_default_effect: self.legacy_default_effect,
        }
    }
}

/// Raw TOML structure.
#[derive(Deserialize, Default)]
struct EditorFile {
    #[serde(default)]
    ingest: IngestSection,
    #[serde(default)]
    preview: PreviewSection,
    #[serde(default)]
    filter: FilterSection,
}

#[derive(Deserialize)]
struct IngestSection {
    #[serde(default = "default_legacy_effect", rename = "legacy-default-effect")]
    legacy_default_effect: Effect,
}

fn default_legacy_effect() -> Effect {
    Effect::Allow
}

impl Default for IngestSection {
    fn default() -> Self {
        Self {
            legacy_default_effect: default_legacy_effect(),
        }
    }
}

#[derive(Deserialize)]
struct PreviewSection {
    #[serde(default = "default_unset_label", rename = "unset-label")]
    unset_label: String,
}

impl Default for PreviewSection {
    fn default() -> Self {
        Self {
            unset_label: default_unset_label(),
        }
    }
}

#[derive(Deserialize, Default)]
struct FilterSection {
    #[serde(default, rename = "keyword-case-sensitive")]
    keyword_case_sensitive: bool,
}

impl EditorFile {
    fn into_config(self) -> EditorConfig {
        EditorConfig {
            legacy_default_effect: self.ingest.legacy_default_effect,
            unset_label: self.preview.unset_label,
            keyword_case_sensitive: self.filter.keyword_case_sensitive,
        }
    }
}
