//! Shared configuration loader for the sdoc toolchain.
//!
//! `defaults/sdoc.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SdocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use sdoc::{DocumentOptions, Theme};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/sdoc.default.toml");

/// Name of the optional per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "sdoc.toml";

/// Top-level configuration consumed by sdoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SdocConfig {
    pub document: DocumentConfig,
    pub demo: DemoConfig,
}

/// Defaults for newly created documents.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub title: String,
    pub theme: String,
    pub autosave: bool,
    #[serde(default)]
    pub custom_css: Option<String>,
}

impl DocumentConfig {
    /// The configured theme; unknown names resolve to [`Theme::Default`].
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme)
    }
}

impl From<&DocumentConfig> for DocumentOptions {
    fn from(config: &DocumentConfig) -> Self {
        let mut options = DocumentOptions::new()
            .with_theme(config.theme())
            .with_autosave(config.autosave);
        if let Some(css) = config.custom_css.as_deref().filter(|css| !css.trim().is_empty()) {
            options = options.with_custom_css(css);
        }
        options
    }
}

impl From<DocumentConfig> for DocumentOptions {
    fn from(config: DocumentConfig) -> Self {
        DocumentOptions::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub output: PathBuf,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SdocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SdocConfig, ConfigError> {
    Loader::new().build()
}
