use crate::locale::{group_digits, split_minor};
use nestly_domain::currency::CurrencyCode;

/// Symbols used when locale formatting is unavailable.
const SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "C$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("CZK", "Kč"),
    ("DKK", "kr"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HUF", "Ft"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "$"),
    ("NGN", "₦"),
    ("NOK", "kr"),
    ("NZD", "NZ$"),
    ("PHP", "₱"),
    ("PLN", "zł"),
    ("RUB", "₽"),
    ("SEK", "kr"),
    ("THB", "฿"),
    ("TRY", "₺"),
    ("UAH", "₴"),
    ("USD", "$"),
    ("VND", "₫"),
    ("ZAR", "R"),
];

/// Symbol for `code` from the static table, or the uppercased code itself.
#[must_use]
pub fn fallback_symbol(code: &str) -> String {
    let code = CurrencyCode::new(code);
    SYMBOLS
        .iter()
        .find(|(c, _)| *c == code.as_str())
        .map_or_else(|| code.to_string(), |(_, s)| (*s).to_owned())
}

/// Renders `{symbol}{amount}` with two decimals and comma thousands grouping.
#[must_use]
pub fn format_fallback(amount_minor: i64, code: &str) -> String {
    let (major, minor) = split_minor(amount_minor);
    let sign = if amount_minor < 0 { "-" } else { "" };
    format!("{sign}{}{}.{minor:02}", fallback_symbol(code), group_digits(major, ',', 1))
}
