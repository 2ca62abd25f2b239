use crate::error::CurrencyError;
use crate::locale::{Locale, NBSP};
use nestly_domain::currency::CurrencyCode;
use std::fmt::Debug;

/// Active ISO 4217 codes. Kept sorted for binary search.
const ISO_4217: [&str; 155] = [
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD", "CAD",
    "CDF", "CHF", "CLP", "CNY", "COP", "CRC", "CUP", "CVE", "CZK", "DJF", "DKK", "DOP", "DZD",
    "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ",
    "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS", "INR", "IQD", "IRR", "ISK", "JMD", "JOD",
    "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR",
    "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR",
    "MWK", "MXN", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN",
    "PGK", "PHP", "PKR", "PLN", "PYG", "QAR", "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR",
    "SDG", "SEK", "SGD", "SHP", "SLE", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB",
    "TJS", "TMT", "TND", "TOP", "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "UYU", "UZS",
    "VES", "VND", "VUV", "WST", "XAF", "XCD", "XOF", "XPF", "YER", "ZAR", "ZMW", "ZWL",
];

/// Narrowed symbols shown for `en-US`. Codes not listed print themselves.
const EN_US_SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CNY", "CN¥"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
    ("PHP", "₱"),
    ("TWD", "NT$"),
    ("USD", "$"),
    ("VND", "₫"),
    ("XAF", "FCFA"),
    ("XCD", "EC$"),
];

/// Symbols shown for `es-ES`.
const ES_ES_SYMBOLS: &[(&str, &str)] = &[("EUR", "€"), ("USD", "US$")];

/// `true` if `code` (any case) is an active ISO 4217 currency.
#[must_use]
pub fn is_iso_currency(code: &str) -> bool {
    let code = CurrencyCode::new(code);
    code.is_well_formed() && ISO_4217.binary_search(&code.as_str()).is_ok()
}

/// The locale-aware primary formatting stage.
///
/// Implementations may refuse any input by returning an error; the caller then falls back
/// to the symbol table. They must be deterministic for a given input.
pub trait LocaleFormatter: Debug + Send + Sync {
    /// Formats `amount_minor` (hundredths) of `code` for `locale` (a BCP 47 tag).
    ///
    /// # Errors
    /// Returns [`CurrencyError`] when the currency or locale is not supported.
    fn format(
        &self,
        amount_minor: i64,
        code: &CurrencyCode,
        locale: &str,
    ) -> Result<String, CurrencyError>;
}

/// Built-in [`LocaleFormatter`] backed by the ISO 4217 table and the [`Locale`] rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoFormatter;

impl IsoFormatter {
    fn symbol(code: &CurrencyCode, locale: Locale) -> &str {
        let table = match locale {
            Locale::EnUs => EN_US_SYMBOLS,
            Locale::EsEs => ES_ES_SYMBOLS,
        };
        table.iter().find(|(c, _)| *c == code.as_str()).map_or(code.as_str(), |(_, s)| *s)
    }
}

impl LocaleFormatter for IsoFormatter {
    fn format(
        &self,
        amount_minor: i64,
        code: &CurrencyCode,
        locale: &str,
    ) -> Result<String, CurrencyError> {
        let locale = Locale::parse(locale).ok_or_else(|| CurrencyError::UnsupportedLocale {
            message: locale.to_owned().into(),
            context: None,
        })?;

        if !is_iso_currency(code.as_str()) {
            return Err(CurrencyError::UnsupportedCurrency {
                message: code.to_string().into(),
                context: Some("Not an ISO 4217 code".into()),
            });
        }

        let sign = if amount_minor < 0 { "-" } else { "" };
        let number = locale.format_unsigned(amount_minor);
        let symbol = Self::symbol(code, locale);

        Ok(match locale {
            Locale::EnUs => {
                // Alphabetic symbols such as `CHF` get a non-breaking space before the digits.
                let gap = if symbol.ends_with(|c: char| c.is_alphabetic()) {
                    NBSP.to_string()
                } else {
                    String::new()
                };
                format!("{sign}{symbol}{gap}{number}")
            },
            Locale::EsEs => format!("{sign}{number}{NBSP}{symbol}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_table_is_sorted() {
        assert!(ISO_4217.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn recognizes_codes_case_insensitively() {
        assert!(is_iso_currency("usd"));
        assert!(is_iso_currency(" EUR "));
        assert!(!is_iso_currency("XYZ"));
        assert!(!is_iso_currency("EURO"));
    }

    #[test]
    fn formats_en_us() {
        let fmt = IsoFormatter;
        let eur = CurrencyCode::new("EUR");
        assert_eq!(fmt.format(150_000, &eur, "en-US").unwrap(), "€1,500.00");
        assert_eq!(fmt.format(-5, &eur, "en-US").unwrap(), "-€0.05");

        let chf = CurrencyCode::new("CHF");
        assert_eq!(fmt.format(1_234_567, &chf, "en-US").unwrap(), "CHF\u{a0}12,345.67");
    }

    #[test]
    fn formats_es_es() {
        let fmt = IsoFormatter;
        let eur = CurrencyCode::new("EUR");
        assert_eq!(fmt.format(150_000, &eur, "es-ES").unwrap(), "1500,00\u{a0}€");
        assert_eq!(fmt.format(1_500_000, &eur, "es-ES").unwrap(), "15.000,00\u{a0}€");
        assert_eq!(
            fmt.format(100, &CurrencyCode::new("GBP"), "es-ES").unwrap(),
            "1,00\u{a0}GBP"
        );
    }

    #[test]
    fn refuses_unknown_locale_and_currency() {
        let fmt = IsoFormatter;
        assert!(matches!(
            fmt.format(1, &CurrencyCode::new("EUR"), "fr-FR"),
            Err(CurrencyError::UnsupportedLocale { .. })
        ));
        assert!(matches!(
            fmt.format(1, &CurrencyCode::new("XYZ"), "en-US"),
            Err(CurrencyError::UnsupportedCurrency { .. })
        ));
    }
}
