//! Locale rule-table loader
//!
//! Manages the embedded locale configurations and the process-wide
//! cache of compiled matchers. Both caches are populated once on first
//! use and read-only afterwards, so lookups are lock-free and safe to
//! share across threads.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{Result, RuleError};
use crate::locale::config::LocaleConfig;
use crate::rules::compiler::CompiledLocale;

static LOCALE_CONFIGS: OnceLock<HashMap<String, LocaleConfig>> = OnceLock::new();
static COMPILED_LOCALES: OnceLock<HashMap<String, Arc<CompiledLocale>>> = OnceLock::new();

/// The rule set used when a locale cannot be resolved
pub const DEFAULT_LOCALE: &str = "en";

macro_rules! embed_locale_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_configs() -> Result<HashMap<String, LocaleConfig>> {
    let mut configs = HashMap::new();

    let embedded_configs = [
        embed_locale_config!("en", "../../configs/locales/en.toml"),
        embed_locale_config!("nl", "../../configs/locales/nl.toml"),
    ];

    for (code, toml_content) in embedded_configs {
        let config: LocaleConfig = toml::from_str(toml_content).map_err(|e| {
            RuleError::Configuration(format!("Failed to parse {code} config: {e}"))
        })?;

        // Validate that the config code matches
        if config.metadata.code != code {
            return Err(RuleError::Configuration(format!(
                "Config code mismatch: expected {}, got {}",
                code, config.metadata.code
            )));
        }

        configs.insert(code.to_string(), config);
    }

    Ok(configs)
}

fn embedded_configs() -> &'static HashMap<String, LocaleConfig> {
    LOCALE_CONFIGS
        .get_or_init(|| load_embedded_configs().expect("Failed to load embedded locale configs"))
}

fn compiled_locales() -> &'static HashMap<String, Arc<CompiledLocale>> {
    COMPILED_LOCALES.get_or_init(|| {
        embedded_configs()
            .iter()
            .map(|(code, config)| {
                let compiled = CompiledLocale::from_config(config)
                    .expect("Failed to compile embedded locale rules");
                (code.clone(), Arc::new(compiled))
            })
            .collect()
    })
}

/// Reduce a locale identifier to its base language code
///
/// Region-qualified identifiers such as `en_US` or `nl-NL` resolve to
/// the language that keys the rule tables.
fn normalize(locale: &str) -> String {
    locale
        .split(['_', '-'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}

/// Get the raw configuration for a locale
pub fn get_locale_config(locale: &str) -> Result<&'static LocaleConfig> {
    embedded_configs()
        .get(&normalize(locale))
        .ok_or_else(|| RuleError::UnsupportedLocale(locale.to_string()))
}

/// Get the compiled matchers for a locale
///
/// Fails with [`RuleError::UnsupportedLocale`] when no rule table exists
/// for the locale's base language.
pub fn get_compiled_locale(locale: &str) -> Result<Arc<CompiledLocale>> {
    compiled_locales()
        .get(&normalize(locale))
        .cloned()
        .ok_or_else(|| RuleError::UnsupportedLocale(locale.to_string()))
}

/// Get the compiled matchers for a locale, falling back to the default
/// rule set ([`DEFAULT_LOCALE`]) when the locale is unknown
pub fn resolve_compiled_locale(locale: &str) -> Arc<CompiledLocale> {
    get_compiled_locale(locale).unwrap_or_else(|_| {
        compiled_locales()[DEFAULT_LOCALE].clone()
    })
}

/// List the locales with embedded rule tables
pub fn list_available_locales() -> Vec<&'static str> {
    embedded_configs().keys().map(|s| s.as_str()).collect()
}
