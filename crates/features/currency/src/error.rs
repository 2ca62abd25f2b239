use std::borrow::Cow;

/// Reasons the locale-aware path declines to format. Consumed by the fallback chain.
#[nestly_derive::nestly_error]
pub enum CurrencyError {
    #[error("Unsupported currency{}: {message}", format_context(.context))]
    UnsupportedCurrency { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unsupported locale{}: {message}", format_context(.context))]
    UnsupportedLocale { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal currency error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
