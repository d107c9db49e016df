//! High-level configuration API

use crate::error::{ApiError, Result};

/// High-level configuration for syllable counting
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) locale: String,
    pub(crate) strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: syllab_core::DEFAULT_LOCALE.to_string(),
            strict: false,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured locale identifier
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether unknown locales are errors instead of falling back to
    /// the default rule set
    pub fn strict(&self) -> bool {
        self.strict
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the locale
    pub fn locale(mut self, locale: &str) -> Result<Self> {
        if locale.is_empty() {
            return Err(ApiError::Config("locale must not be empty".to_string()));
        }
        self.config.locale = locale.to_string();
        Ok(self)
    }

    /// Treat unknown locales as errors instead of falling back to the
    /// default rule set
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        Ok(self.config)
    }
}
