use crate::fallback::format_fallback;
use crate::iso::{IsoFormatter, LocaleFormatter};
use nestly_domain::config::CurrencyConfig;
use nestly_domain::constants::DEFAULT_LOCALE;
use nestly_domain::currency::CurrencyCode;
use std::sync::{Arc, LazyLock};
use tracing::trace;

static DEFAULT_FORMATTER: LazyLock<CurrencyFormatter> = LazyLock::new(CurrencyFormatter::default);

/// Formats `amount_minor` of `code` for the default locale (`en-US`).
///
/// ```rust
/// assert_eq!(nestly_currency::format_amount(150_000, "EUR"), "€1,500.00");
/// ```
#[must_use]
pub fn format_amount(amount_minor: i64, code: &str) -> String {
    DEFAULT_FORMATTER.format(amount_minor, code)
}

/// The display symbol of `code` for the default locale (`en-US`).
#[must_use]
pub fn symbol_only(code: &str) -> String {
    DEFAULT_FORMATTER.symbol(code)
}

/// Currency formatter bound to a display locale.
///
/// Runs the primary [`LocaleFormatter`] and substitutes the static symbol table on any
/// failure. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    locale: String,
    default_currency: CurrencyCode,
    primary: Arc<dyn LocaleFormatter>,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl CurrencyFormatter {
    /// Creates a formatter for `locale` backed by [`IsoFormatter`].
    ///
    /// Unsupported locales are accepted; every call then takes the fallback path.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            default_currency: CurrencyCode::new("EUR"),
            primary: Arc::new(IsoFormatter),
        }
    }

    #[must_use]
    pub fn from_config(config: &CurrencyConfig) -> Self {
        Self::new(config.locale.clone()).with_default_currency(&config.default_currency)
    }

    /// Replaces the primary stage.
    #[must_use]
    pub fn with_primary(mut self, primary: impl LocaleFormatter + 'static) -> Self {
        self.primary = Arc::new(primary);
        self
    }

    /// Currency used by [`CurrencyFormatter::format_or_default`].
    #[must_use]
    pub fn with_default_currency(mut self, code: &str) -> Self {
        self.default_currency = CurrencyCode::new(code);
        self
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub const fn default_currency(&self) -> &CurrencyCode {
        &self.default_currency
    }

    /// Formats `amount_minor` (hundredths) of `code`. Never fails.
    #[must_use]
    pub fn format(&self, amount_minor: i64, code: &str) -> String {
        let code = CurrencyCode::new(code);
        self.try_primary(amount_minor, &code)
            .unwrap_or_else(|| format_fallback(amount_minor, code.as_str()))
    }

    /// Like [`CurrencyFormatter::format`], using the default currency when `code` is absent
    /// or blank.
    #[must_use]
    pub fn format_or_default(&self, amount_minor: i64, code: Option<&str>) -> String {
        match code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => self.format(amount_minor, code),
            None => self.format(amount_minor, self.default_currency.as_str()),
        }
    }

    /// The symbol `code` is displayed with: a formatted zero with digits, separators and
    /// spacing removed.
    #[must_use]
    pub fn symbol(&self, code: &str) -> String {
        let rendered = self.format(0, code);
        rendered
            .chars()
            .filter(|c| !(c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | ',' | '-')))
            .collect()
    }

    fn try_primary(&self, amount_minor: i64, code: &CurrencyCode) -> Option<String> {
        match self.primary.format(amount_minor, code, &self.locale) {
            Ok(rendered) => Some(rendered),
            Err(err) => {
                trace!(
                    code = %code,
                    locale = %self.locale,
                    error = %err,
                    "Locale formatting unavailable, using symbol table"
                );
                None
            },
        }
    }
}
