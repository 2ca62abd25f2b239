use std::borrow::Cow;

#[nestly_derive::nestly_error]
pub enum I18nError {
    #[error("Unsupported language{}: {message}", format_context(.context))]
    UnsupportedLanguage { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid translation bundle{}: {source}", format_context(.context))]
    InvalidBundle { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Translation bundle must be a JSON object{}: {message}", format_context(.context))]
    BundleShape { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Failed to persist language preference{}: {message}", format_context(.context))]
    Persistence { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal i18n error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
