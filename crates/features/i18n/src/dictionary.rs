use crate::error::{I18nError, I18nErrorExt};
use fxhash::FxHashMap;
use nestly_domain::language::Language;
use serde_json::Value;
use std::sync::{Arc, LazyLock};
use strum::IntoEnumIterator;
use tracing::error;

const EN_BUNDLE: &str = include_str!("../locales/en.json");
const ES_BUNDLE: &str = include_str!("../locales/es.json");

static EMBEDDED: LazyLock<Arc<Dictionary>> = LazyLock::new(|| {
    let dictionary = Dictionary::default()
        .with_json(Language::En, EN_BUNDLE)
        .and_then(|d| d.with_json(Language::Es, ES_BUNDLE));

    Arc::new(dictionary.unwrap_or_else(|err| {
        error!(error = %err, "Embedded translation bundles are invalid, keys will render verbatim");
        Dictionary::default()
    }))
});

/// Immutable `Language -> (key -> text)` mapping.
///
/// Nested JSON objects are flattened into dotted keys: `{"upload": {"tooManyFiles": ".."}}`
/// is looked up as `upload.tooManyFiles`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    bundles: FxHashMap<Language, FxHashMap<String, String>>,
}

impl Dictionary {
    /// The bundles compiled into the binary, parsed once per process.
    #[must_use]
    pub fn embedded() -> Arc<Self> {
        Arc::clone(&EMBEDDED)
    }

    /// Builds a dictionary holding a single bundle.
    ///
    /// # Errors
    /// Returns [`I18nError::InvalidBundle`] for malformed JSON and [`I18nError::BundleShape`]
    /// when the document is not an object of strings and nested objects.
    pub fn from_json(language: Language, json: &str) -> Result<Self, I18nError> {
        Self::default().with_json(language, json)
    }

    /// Adds (or replaces) the bundle for `language`.
    ///
    /// # Errors
    /// See [`Dictionary::from_json`].
    pub fn with_json(mut self, language: Language, json: &str) -> Result<Self, I18nError> {
        let document: Value =
            serde_json::from_str(json).context(format!("Parsing `{language}` bundle"))?;

        let mut entries = FxHashMap::default();
        flatten(&document, String::new(), &mut entries)
            .context(format!("Reading `{language}` bundle"))?;

        self.bundles.insert(language, entries);
        Ok(self)
    }

    /// Text for `key` in exactly `language`, without fallback.
    #[must_use]
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.bundles.get(&language)?.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.get(language, key).is_some()
    }

    /// Number of keys in the bundle for `language`.
    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.bundles.get(&language).map_or(0, FxHashMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.values().all(FxHashMap::is_empty)
    }

    /// Keys present in the fallback language but absent from `language`, sorted.
    #[must_use]
    pub fn missing_keys(&self, language: Language) -> Vec<&str> {
        let Some(reference) = self.bundles.get(&Language::FALLBACK) else {
            return Vec::new();
        };

        let mut missing: Vec<&str> = reference
            .keys()
            .filter(|key| !self.contains(language, key))
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Languages with at least one entry.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        Language::iter().filter(|lang| self.len(*lang) > 0)
    }
}

fn flatten(
    value: &Value,
    prefix: String,
    out: &mut FxHashMap<String, String>,
) -> Result<(), I18nError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                flatten(child, path, out)?;
            }
            Ok(())
        },
        Value::String(text) if !prefix.is_empty() => {
            out.insert(prefix, text.clone());
            Ok(())
        },
        other => Err(I18nError::BundleShape {
            message: format!("unexpected {} at `{prefix}`", kind(other)).into(),
            context: None,
        }),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
