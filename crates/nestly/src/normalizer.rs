use crate::error::{NormalizerError, NormalizerErrorExt};
use nestly_currency::CurrencyFormatter;
use nestly_domain::config::{AppConfig, UploadsConfig};
use nestly_domain::language::Language;
use nestly_domain::severity::StatusSeverity;
use nestly_domain::upload::{FileCandidate, UploadKind, ValidationError, ValidationField};
use nestly_i18n::Translator;
use nestly_status::StatusBadge;
use nestly_uploads::{BatchReport, UploadPolicy, Validator};
use std::borrow::Cow;
use tracing::debug;

/// One validator per [`UploadKind`].
#[derive(Debug, Clone)]
pub struct UploadPolicies {
    image: Validator,
    document: Validator,
    avatar: Validator,
}

impl Default for UploadPolicies {
    fn default() -> Self {
        Self {
            image: Validator::new("image", UploadPolicy::image()),
            document: Validator::new("document", UploadPolicy::document()),
            avatar: Validator::new("avatar", UploadPolicy::avatar()),
        }
    }
}

impl UploadPolicies {
    /// Checks every configured policy.
    ///
    /// # Errors
    /// Returns [`NormalizerError::Policy`] naming the first invalid section.
    pub fn from_config(config: &UploadsConfig) -> Result<Self, NormalizerError> {
        Ok(Self {
            image: Validator::new(
                "image",
                UploadPolicy::try_from(&config.image).context("uploads.image")?,
            ),
            document: Validator::new(
                "document",
                UploadPolicy::try_from(&config.document).context("uploads.document")?,
            ),
            avatar: Validator::new(
                "avatar",
                UploadPolicy::try_from(&config.avatar).context("uploads.avatar")?,
            ),
        })
    }

    #[must_use]
    pub const fn get(&self, kind: UploadKind) -> &Validator {
        match kind {
            UploadKind::Image => &self.image,
            UploadKind::Document => &self.document,
            UploadKind::Avatar => &self.avatar,
        }
    }
}

/// Every normalization operation behind one value, configured once.
#[derive(Debug, Clone)]
pub struct Normalizer {
    uploads: UploadPolicies,
    currency: CurrencyFormatter,
    translator: Translator,
}

impl Normalizer {
    /// Builds the components from `config`. The translator starts in the configured default
    /// language; restore a persisted choice with [`Normalizer::set_language`].
    ///
    /// # Errors
    /// Returns [`NormalizerError::Policy`] if an upload policy in `config` is invalid.
    pub fn new(config: &AppConfig) -> Result<Self, NormalizerError> {
        let normalizer = Self {
            uploads: UploadPolicies::from_config(&config.uploads)?,
            currency: CurrencyFormatter::from_config(&config.currency),
            translator: Translator::embedded(config.i18n.default_language),
        };
        debug!(
            locale = normalizer.currency.locale(),
            language = %normalizer.translator.language(),
            "Normalizer ready"
        );
        Ok(normalizer)
    }

    #[must_use]
    pub const fn uploads(&self) -> &UploadPolicies {
        &self.uploads
    }

    #[must_use]
    pub const fn currency(&self) -> &CurrencyFormatter {
        &self.currency
    }

    #[must_use]
    pub const fn translator(&self) -> &Translator {
        &self.translator
    }

    // --- Uploads ---

    #[must_use]
    pub fn validate_file(&self, kind: UploadKind, file: &FileCandidate) -> Vec<ValidationError> {
        self.uploads.get(kind).validate(file)
    }

    #[must_use]
    pub fn validate_batch(&self, kind: UploadKind, files: &[FileCandidate]) -> BatchReport {
        self.uploads.get(kind).validate_batch(files)
    }

    /// Same checks as [`Normalizer::validate_file`], with messages from the `upload.*`
    /// translation keys in the current language.
    #[must_use]
    pub fn validate_file_localized(
        &self,
        kind: UploadKind,
        file: &FileCandidate,
    ) -> Vec<ValidationError> {
        let policy = self.uploads.get(kind).policy();
        self.validate_file(kind, file)
            .into_iter()
            .map(|error| self.localize(policy, file, error))
            .collect()
    }

    fn localize(
        &self,
        policy: &UploadPolicy,
        file: &FileCandidate,
        error: ValidationError,
    ) -> ValidationError {
        let limit = |v: Option<u32>| v.map_or_else(|| "-".to_owned(), |v| v.to_string());
        let message = match error.field {
            ValidationField::Size => self.translator.t_with(
                "upload.fileTooLarge",
                &[("max", nestly_uploads::format_size(policy.max_size_bytes()).as_str())],
            ),
            ValidationField::Type => {
                let mime = file.mime_type.as_str();
                let mime = if mime.trim().is_empty() { "unknown" } else { mime };
                self.translator.t_with("upload.typeNotAllowed", &[("mime", mime)])
            },
            ValidationField::Count => {
                let max = policy.max_files().map_or_else(String::new, |m| m.to_string());
                self.translator.t_with("upload.tooManyFiles", &[("max", max.as_str())])
            },
            ValidationField::Dimensions => self.translator.t_with(
                "upload.dimensionsTooLarge",
                &[
                    ("width", limit(policy.max_width()).as_str()),
                    ("height", limit(policy.max_height()).as_str()),
                ],
            ),
        };
        ValidationError::new(error.field, message)
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn format_size(&self, bytes: u64) -> String {
        nestly_uploads::format_size(bytes)
    }

    // --- Currency ---

    #[must_use]
    pub fn format_amount(&self, amount_minor: i64, code: &str) -> String {
        self.currency.format(amount_minor, code)
    }

    #[must_use]
    pub fn symbol_only(&self, code: &str) -> String {
        self.currency.symbol(code)
    }

    // --- Status ---

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn classify_status(&self, raw: &str) -> StatusSeverity {
        nestly_status::classify_status(raw)
    }

    #[must_use]
    pub fn label_for(&self, raw: &str, label: Option<&str>) -> String {
        nestly_status::label_for(raw, label, &self.translator)
    }

    #[must_use]
    pub fn badge(&self, raw: &str, label: Option<&str>) -> StatusBadge {
        StatusBadge::resolve(raw, label, &self.translator)
    }

    // --- Translations ---

    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        self.translator.t(key)
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.translator.language()
    }

    /// # Errors
    /// Returns [`NormalizerError::I18n`] for unsupported languages; the current one is kept.
    pub fn set_language(&mut self, raw: &str) -> Result<Language, NormalizerError> {
        Ok(self.translator.set_language(raw)?)
    }

    /// Switches to a language already validated elsewhere (for example a stored preference).
    pub const fn use_language(&mut self, language: Language) {
        self.translator.use_language(language);
    }
}
