//! Configuration for artifact generation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse config file
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration for generating templates and field schemas
///
/// Loaded from TOML with kebab-case keys; every key is optional.
///
/// ```toml
/// template-extension = "mustache"
/// schema-suffix = ".fields.json"
/// lowercase-names = false
/// output-dir = "out"
/// pretty-json = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorConfig {
    /// Extension of the template file, without the leading dot
    pub template_extension: String,

    /// Suffix appended to the output base for the field schema file
    pub schema_suffix: String,

    /// Lowercase the output file names
    pub lowercase_names: bool,

    /// Directory for both artifacts (defaults to the input's directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Pretty-print the field schema JSON
    pub pretty_json: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_extension: "template".to_string(),
            schema_suffix: "-schema.json".to_string(),
            lowercase_names: true,
            output_dir: None,
            pretty_json: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.template_extension = normalize_extension(&config.template_extension);
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded generator config");
        Ok(config)
    }
}

/// Builder for GeneratorConfig
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Start from an existing configuration
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Set the template file extension (a leading dot is dropped)
    pub fn template_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.template_extension = normalize_extension(&extension.into());
        self
    }

    /// Set the field schema file suffix
    pub fn schema_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.schema_suffix = suffix.into();
        self
    }

    /// Enable or disable lowercasing of output names
    pub fn lowercase_names(mut self, lowercase: bool) -> Self {
        self.config.lowercase_names = lowercase;
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    /// Enable or disable pretty-printed JSON
    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.config.pretty_json = pretty;
        self
    }

    /// Build the configuration
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_string()
}
