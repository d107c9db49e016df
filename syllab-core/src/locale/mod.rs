//! Locale rule tables: TOML schema and the embedded-locale loader

pub mod config;
pub mod loader;

pub use config::{Adjustments, ExclusionRule, Exclusions, LocaleConfig, Metadata, Vowels};
pub use loader::{
    get_compiled_locale, get_locale_config, list_available_locales, resolve_compiled_locale,
    DEFAULT_LOCALE,
};
