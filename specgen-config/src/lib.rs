//! Shared configuration loader for specgen.
//!
//! `defaults/specgen.default.toml` is compiled in and always forms the bottom layer. Above it
//! the CLI stacks, in order: `specgen.toml` from the working directory when present
//! ([`LOCAL_CONFIG_FILE`]), the `--config` file, then flag overrides. [`Loader`] performs the
//! stacking and deserializes the result into [`SpecgenConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use specgen_scrape::ScanRules;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/specgen.default.toml");

/// Project-local config file picked up from the working directory
pub const LOCAL_CONFIG_FILE: &str = "specgen.toml";

/// Top-level configuration consumed by specgen.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecgenConfig {
    pub output: OutputConfig,
    pub html: HtmlConfig,
}

/// Where and how schema files are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub html_file: String,
    pub pretty: bool,
}

impl OutputConfig {
    pub fn html_path(&self) -> PathBuf {
        self.dir.join(&self.html_file)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub source_url: String,
    pub scan: ScanConfig,
}

/// Mirrors the knobs of [`ScanRules`].
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    pub section_heading: String,
    pub section_id: String,
    pub entry_heading: String,
    pub entry_id_markers: Vec<String>,
    pub name_tag: String,
    pub description_tag: String,
}

impl From<ScanConfig> for ScanRules {
    fn from(scan: ScanConfig) -> Self {
        ScanRules {
            section_heading: scan.section_heading,
            section_id: scan.section_id,
            entry_heading: scan.entry_heading,
            entry_id_markers: scan.entry_id_markers,
            name_tag: scan.name_tag,
            description_tag: scan.description_tag,
        }
    }
}

/// Stack of config sources, lowest priority first
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the compiled-in defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file that must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file that is skipped when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Force `key` (dotted path, e.g. `output.dir`) to `value` above every file.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the stack into a [`SpecgenConfig`].
    pub fn build(self) -> Result<SpecgenConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in configuration, with nothing layered on top.
pub fn load_defaults() -> Result<SpecgenConfig, ConfigError> {
    Loader::new().build()
}
