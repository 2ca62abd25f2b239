use nestly_domain::constants::MINOR_UNITS_PER_MAJOR;
use std::fmt;

pub(crate) const NBSP: char = '\u{a0}';

/// Display locales understood by [`crate::IsoFormatter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// `$1,500.00`
    #[default]
    EnUs,
    /// `1500,00 €`, `15.000,00 €`
    EsEs,
}

impl Locale {
    /// Parses a BCP 47 tag. Accepts `_` as separator and a bare language (`es`).
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en" | "en-us" => Some(Self::EnUs),
            "es" | "es-es" => Some(Self::EsEs),
            _ => None,
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EsEs => "es-ES",
        }
    }

    const fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }

    const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }

    /// Digits required left of the first separator before grouping kicks in.
    const fn min_grouping_digits(self) -> usize {
        match self {
            Self::EnUs => 1,
            Self::EsEs => 2,
        }
    }

    /// Renders the absolute value of `amount_minor` in major units with two decimals.
    pub(crate) fn format_unsigned(self, amount_minor: i64) -> String {
        let (major, minor) = split_minor(amount_minor);
        let grouped = group_digits(major, self.group_separator(), self.min_grouping_digits());
        format!("{grouped}{}{minor:02}", self.decimal_separator())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Splits a signed minor amount into absolute major and minor parts.
pub(crate) const fn split_minor(amount_minor: i64) -> (u64, u64) {
    let abs = amount_minor.unsigned_abs();
    let per_major = MINOR_UNITS_PER_MAJOR.unsigned_abs();
    (abs / per_major, abs % per_major)
}

/// Inserts `separator` every three digits from the right.
pub(crate) fn group_digits(value: u64, separator: char, min_grouping: usize) -> String {
    let digits = value.to_string();
    if digits.len() < 3 + min_grouping {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
