use crate::constants::{
    DEFAULT_LOCALE, MIME_DOC, MIME_DOCX, MIME_GIF, MIME_JPEG, MIME_PDF, MIME_PNG, MIME_WEBP,
};
use crate::language::Language;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration shared across the normalization components.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub uploads: UploadsConfig,
    pub currency: CurrencyConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Upload policies by use case.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    pub image: PolicyConfig,
    pub document: PolicyConfig,
    pub avatar: PolicyConfig,
}

/// Raw, unchecked upload policy as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    pub max_size_bytes: u64,
    pub allowed_mime_types: Vec<String>,
    #[serde(default)]
    pub max_width: Option<u32>,
    #[serde(default)]
    pub max_height: Option<u32>,
    #[serde(default)]
    pub max_files: Option<usize>,
}

/// Currency display settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// BCP 47 tag of the display locale (`en-US`, `es-ES`).
    pub locale: String,
    /// Currency assumed when the backend omits one.
    pub default_currency: String,
}

/// Translation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Language used until a persisted preference is found.
    pub default_language: Language,
    /// Settings file holding the persisted language preference.
    pub settings_path: PathBuf,
}

/// Logging knobs consumed by the applications.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub env_filter: Option<String>,
    pub path: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

const MB: u64 = 1024 * 1024;

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            image: PolicyConfig::image(),
            document: PolicyConfig::document(),
            avatar: PolicyConfig::avatar(),
        }
    }
}

impl PolicyConfig {
    /// Property listing photos.
    #[must_use]
    pub fn image() -> Self {
        Self {
            max_size_bytes: 5 * MB,
            allowed_mime_types: owned(&[MIME_JPEG, MIME_PNG, MIME_WEBP, MIME_GIF]),
            max_width: None,
            max_height: None,
            max_files: Some(20),
        }
    }

    /// Identity documents, contracts, payslips.
    #[must_use]
    pub fn document() -> Self {
        Self {
            max_size_bytes: 10 * MB,
            allowed_mime_types: owned(&[MIME_PDF, MIME_JPEG, MIME_PNG, MIME_DOC, MIME_DOCX]),
            max_width: None,
            max_height: None,
            max_files: Some(10),
        }
    }

    /// Profile pictures.
    #[must_use]
    pub fn avatar() -> Self {
        Self {
            max_size_bytes: 2 * MB,
            allowed_mime_types: owned(&[MIME_JPEG, MIME_PNG, MIME_WEBP]),
            max_width: Some(1024),
            max_height: Some(1024),
            max_files: Some(1),
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self { locale: DEFAULT_LOCALE.to_owned(), default_currency: "EUR".to_owned() }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self { default_language: Language::En, settings_path: PathBuf::from("settings.json") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), env_filter: None, path: None, json: false }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
