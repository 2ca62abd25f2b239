use crate::error::I18nError;
use crate::translator::Translator;
use nestly_domain::constants::LANGUAGE_SETTING_KEY;
use nestly_domain::language::Language;
use std::error::Error;
use std::future::Future;
use tracing::{debug, warn};

/// A persistent string key-value store, such as a settings file.
pub trait SettingsStore: Send + Sync {
    type Error: Error + Send + Sync + 'static;

    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Reads and writes the preferred UI language through a [`SettingsStore`].
#[derive(Debug, Clone)]
pub struct LanguagePreference<S> {
    store: S,
    default: Language,
}

impl<S: SettingsStore> LanguagePreference<S> {
    pub const fn new(store: S) -> Self {
        Self { store, default: Language::FALLBACK }
    }

    /// Language used when nothing valid is stored.
    #[must_use]
    pub const fn with_default(mut self, language: Language) -> Self {
        self.default = language;
        self
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The stored language. Missing, unknown or unreadable values yield the default.
    pub async fn load(&self) -> Language {
        match self.store.get(LANGUAGE_SETTING_KEY).await {
            Ok(Some(raw)) => Language::parse(&raw).unwrap_or_else(|| {
                warn!(stored = %raw, fallback = %self.default, "Discarding unsupported stored language");
                self.default
            }),
            Ok(None) => self.default,
            Err(err) => {
                warn!(error = %err, fallback = %self.default, "Language preference unreadable");
                self.default
            },
        }
    }

    /// Stores `language` as the preference.
    ///
    /// # Errors
    /// Returns [`I18nError::Persistence`] when the store rejects the write.
    pub async fn persist(&self, language: Language) -> Result<(), I18nError> {
        self.store.set(LANGUAGE_SETTING_KEY, language.code()).await.map_err(|err| {
            I18nError::Persistence {
                message: err.to_string().into(),
                context: Some(format!("writing `{LANGUAGE_SETTING_KEY}`").into()),
            }
        })?;
        debug!(language = %language, "Language preference saved");
        Ok(())
    }

    /// Switches `translator` to `raw` and persists the choice.
    ///
    /// # Errors
    /// Returns [`I18nError::UnsupportedLanguage`] without touching the store when `raw` is
    /// rejected, or [`I18nError::Persistence`] when the write fails. In the latter case the
    /// translator keeps the new language.
    pub async fn apply(&self, translator: &mut Translator, raw: &str) -> Result<Language, I18nError> {
        let language = translator.set_language(raw)?;
        self.persist(language).await?;
        Ok(language)
    }

    /// A translator initialized from the stored preference.
    pub async fn restore(&self) -> Translator {
        Translator::embedded(self.load().await)
    }
}
