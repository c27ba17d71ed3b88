//! Scanner settings file.

use super::ConfigError;
use crate::evaluation::RuleSet;
use crate::render::OutputFormat;
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// Settings read from an optional TOML file.
///
/// ```toml
/// api-url = "https://github.example.com/api/v3/"
/// format = "json"
///
/// [rules]
/// readme-path = "README.md"
/// min-readme-length = 100
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Base URL of the GitHub API; the public API when unset.
    #[serde(default)]
    pub api_url: Option<Url>,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Rule tuning.
    #[serde(default)]
    pub rules: RuleSet,
}

/// Values given on the command line; they take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// API base URL, unparsed.
    pub api_url: Option<String>,

    /// Output format.
    pub format: Option<OutputFormat>,
}

/// Source name used in errors about command line values.
const COMMAND_LINE: &str = "<command line>";

impl Settings {
    /// Loads and validates settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parses and validates settings from TOML text. `path` is used only in
    /// error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if parsing or validation fails.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Applies command line overrides on top of these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if an override is invalid.
    pub fn merge(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(raw) = overrides.api_url {
            let url = Url::parse(&raw).map_err(|e| ConfigError::ValidationError {
                path: COMMAND_LINE.to_string(),
                message: format!("invalid api-url '{raw}': {e}"),
            })?;
            self.api_url = Some(url);
        }

        if let Some(format) = overrides.format {
            self.format = format;
        }

        self.validate(Path::new(COMMAND_LINE))?;
        Ok(self)
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] on the first invalid value.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let fail = |message: &str| ConfigError::ValidationError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if self.rules.readme_path.trim().is_empty() {
            return Err(fail("rules.readme-path is required"));
        }

        if self.rules.min_readme_length == 0 {
            return Err(fail("rules.min-readme-length must be greater than 0"));
        }

        if let Some(url) = &self.api_url {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(fail("api-url must be an http or https URL"));
            }
        }

        Ok(())
    }
}
