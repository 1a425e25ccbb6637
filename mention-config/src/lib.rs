//! Shared configuration loader for the course mention tools.
//!
//! `defaults/mentions.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MentionsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mention_parser::{DepartmentLexicon, LexiconBuilder, LexiconError, MentionParser};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../defaults/mentions.default.toml");

/// Errors raised while loading configuration or building what it describes
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid lexicon configuration: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Top-level configuration consumed by the mention tools.
#[derive(Debug, Clone, Deserialize)]
pub struct MentionsConfig {
    pub lexicon: LexiconConfig,
    pub output: OutputConfig,
    pub thread: ThreadConfig,
}

/// Which departments the parser recognizes.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    pub preset: LexiconPreset,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub pages: Vec<PageEntryConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexiconPreset {
    Ucsc,
    None,
}

/// One sub-heading of a multi-department catalog page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageEntryConfig {
    pub page: String,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub catalog_keys: bool,
    pub show_spans: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Lines,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThreadConfig {
    #[serde(default)]
    pub ignored_authors: Vec<String>,
}

impl MentionsConfig {
    /// Build the department lexicon described by `[lexicon]`.
    pub fn lexicon(&self) -> Result<DepartmentLexicon, ConfigLoadError> {
        let config = &self.lexicon;
        let mut builder = match config.preset {
            LexiconPreset::Ucsc => LexiconBuilder::ucsc(),
            LexiconPreset::None => LexiconBuilder::new(),
        };
        builder = builder.departments(config.departments.iter().cloned());
        for (alias, target) in &config.aliases {
            builder = builder.alias(alias.as_str(), target.as_str());
        }
        for entry in &config.pages {
            builder = builder.page_entry(
                entry.page.as_str(),
                entry.name.as_str(),
                entry.code.as_str(),
            );
        }
        let lexicon = builder.build()?;
        debug!(
            preset = ?config.preset,
            departments = lexicon.len(),
            "configured lexicon"
        );
        Ok(lexicon)
    }

    /// A parser over [`lexicon`](Self::lexicon).
    pub fn parser(&self) -> Result<MentionParser, ConfigLoadError> {
        Ok(MentionParser::new(self.lexicon()?)?)
    }
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

    /// Apply a single key/value override (CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigLoadError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MentionsConfig, ConfigLoadError> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MentionsConfig, ConfigLoadError> {
    Loader::new().build()
}
