//! Palette configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! [bindings]
//! username = "octocat"
//!
//! [fallbacks]
//! username = "your-username"
//!
//! [ids]
//! salt = "session-1"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Value substituted for `{username}` when no real username is bound
pub const DEFAULT_USERNAME: &str = "your-username";

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for a palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Real values for template placeholders
    pub bindings: BTreeMap<String, String>,

    /// Values used when a placeholder has no binding
    pub fallbacks: BTreeMap<String, String>,

    /// Fixed identifier salt; a random one is used when absent
    ///
    /// Ids are only unique per generator, so two palettes sharing a fixed
    /// salt produce the same ids. Use it for reproducible output only.
    pub id_salt: Option<String>,
}

#[derive(Deserialize)]
struct TomlConfig {
    #[serde(default)]
    bindings: BTreeMap<String, String>,
    #[serde(default)]
    fallbacks: BTreeMap<String, String>,
    ids: Option<TomlIds>,
}

#[derive(Deserialize)]
struct TomlIds {
    salt: Option<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            bindings: BTreeMap::new(),
            fallbacks: BTreeMap::from([("username".to_string(), DEFAULT_USERNAME.to_string())]),
            id_salt: None,
        }
    }
}

impl PaletteConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path:? = path; "Loading palette config");
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Fallbacks from the file are layered over the defaults, so a file that
    /// only sets bindings still falls back to `your-username`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        let mut config = Self::default();
        config.bindings = parsed.bindings;
        config.fallbacks.extend(parsed.fallbacks);
        config.id_salt = parsed.ids.and_then(|ids| ids.salt);
        Ok(config)
    }

    /// Bind a placeholder to a real value
    pub fn with_binding(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.bindings.insert(name.into(), value.into());
        self
    }

    /// Set the fallback value for a placeholder
    pub fn with_fallback(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fallbacks.insert(name.into(), value.into());
        self
    }

    /// Bind the `username` placeholder
    pub fn with_username(self, username: impl Into<String>) -> Self {
        self.with_binding("username", username)
    }

    /// Use a fixed identifier salt
    pub fn with_id_salt(mut self, salt: impl Into<String>) -> Self {
        self.id_salt = Some(salt.into());
        self
    }
}
