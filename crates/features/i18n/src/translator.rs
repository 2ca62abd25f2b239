use crate::dictionary::Dictionary;
use crate::error::I18nError;
use nestly_domain::language::Language;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves translation keys for one current language.
///
/// The translator is a plain value: callers own it and pass it to whatever needs strings.
/// Switching language only touches this instance; persisting the choice is up to the caller
/// (see [`crate::LanguagePreference`]).
///
/// ```rust
/// use nestly_i18n::{Language, Translator};
///
/// let mut i18n = Translator::embedded(Language::En);
/// assert_eq!(i18n.t("fullySigned"), "Fully signed");
///
/// i18n.set_language("ES").unwrap();
/// assert_eq!(i18n.t("fullySigned"), "Firmado por ambas partes");
/// assert_eq!(i18n.t("noSuchKey"), "noSuchKey");
/// assert!(i18n.set_language("fr").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    dictionary: Arc<Dictionary>,
    language: Language,
}

impl Default for Translator {
    fn default() -> Self {
        Self::embedded(Language::FALLBACK)
    }
}

impl Translator {
    #[must_use]
    pub const fn new(dictionary: Arc<Dictionary>, language: Language) -> Self {
        Self { dictionary, language }
    }

    /// A translator over the bundles compiled into the binary.
    #[must_use]
    pub fn embedded(language: Language) -> Self {
        Self::new(Dictionary::embedded(), language)
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Switches to an already validated language.
    pub const fn use_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switches language from untrusted input (trimmed, case-insensitive).
    ///
    /// # Errors
    /// Returns [`I18nError::UnsupportedLanguage`] for anything but `en` or `es`; the current
    /// language is left unchanged.
    pub fn set_language(&mut self, raw: &str) -> Result<Language, I18nError> {
        let Some(language) = Language::parse(raw) else {
            warn!(requested = raw, current = %self.language, "Rejected unsupported language");
            return Err(I18nError::UnsupportedLanguage {
                message: raw.trim().to_owned().into(),
                context: Some("expected `en` or `es`".into()),
            });
        };

        debug!(from = %self.language, to = %language, "Language switched");
        self.language = language;
        Ok(language)
    }

    /// Text for `key`: current language, then English, then the key itself.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        self.lookup(key).map_or(Cow::Borrowed(key), Cow::Borrowed)
    }

    /// Like [`Translator::t`], then replaces each `{name}` with its value.
    ///
    /// Placeholders without a matching argument are left as written.
    #[must_use]
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key).into_owned();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    /// `true` when `key` resolves in the current or fallback language.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.dictionary
            .get(self.language, key)
            .or_else(|| self.dictionary.get(Language::FALLBACK, key))
    }
}
