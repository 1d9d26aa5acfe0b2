//! Shared configuration loader for the sb2md toolchain.
//!
//! `defaults/sb2md.default.toml` is compiled in and always forms the bottom layer, so every
//! key has a value. [`Loader`] stacks `sb2md.toml` from the working directory and any explicit
//! `--config` file on top, then deserializes the result into [`Sb2mdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, FileSourceFile};
use sb2md::ConvertOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/sb2md.default.toml");

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "sb2md.toml";

/// Top-level configuration consumed by sb2md applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Sb2mdConfig {
    pub convert: ConvertConfig,
    pub log: LogConfig,
}

/// Mirrors the knobs exposed by [`ConvertOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub max_list_depth: usize,
    pub list_indent: String,
}

impl From<ConvertConfig> for ConvertOptions {
    fn from(config: ConvertConfig) -> Self {
        ConvertOptions {
            max_list_depth: config.max_list_depth,
            list_indent: config.list_indent,
        }
    }
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConvertOptions {
            max_list_depth: config.max_list_depth,
            list_indent: config.list_indent.clone(),
        }
    }
}

/// Diagnostics written to stderr.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
}

/// Layers configuration files over the embedded defaults.
///
/// Later layers win key by key, so a file only needs the keys it changes.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from the embedded `sb2md.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer [`LOCAL_CONFIG_FILE`] from the working directory, when there is one.
    pub fn with_local_file(self) -> Self {
        self.with_optional_file(LOCAL_CONFIG_FILE)
    }

    /// Layer a file that must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self.builder.add_source(toml_file(path.as_ref(), true));
        self
    }

    /// Layer a file, skipped when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self.builder.add_source(toml_file(path.as_ref(), false));
        self
    }

    /// Merge the layers and deserialize them into a [`Sb2mdConfig`].
    pub fn build(self) -> Result<Sb2mdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

fn toml_file(path: &Path, required: bool) -> File<FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml).required(required)
}
