use serde::{Deserialize, Serialize};
use std::fmt;

/// An ISO 4217 style currency code.
///
/// Input is case-insensitive and normalized to uppercase. Construction never fails:
/// malformed input is kept (trimmed, uppercased) so that formatting can still fall back
/// to printing the code itself. Use [`CurrencyCode::is_well_formed`] to tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_ascii_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the code is exactly three ASCII letters.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 3 && self.0.bytes().all(|b| b.is_ascii_uppercase())
    }
}

impl From<&str> for CurrencyCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CurrencyCode {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
