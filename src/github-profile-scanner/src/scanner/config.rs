//! Scanner configuration.

use crate::config::Settings;

/// Configuration for a single scan.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Account whose repositories are scanned.
    account: String,
    /// GitHub token; anonymous access when absent.
    token: Option<String>,
    /// File-backed settings merged with CLI overrides.
    settings: Settings,
}

impl ScannerConfig {
    /// Creates a configuration with default settings.
    pub fn new(account: impl Into<String>, token: Option<String>) -> Self {
        Self {
            account: account.into(),
            token,
            settings: Settings::default(),
        }
    }

    /// Replaces the settings.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the scanned account.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether the scan runs authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
