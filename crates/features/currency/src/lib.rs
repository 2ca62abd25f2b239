//! # Currency Formatting
//!
//! Turns an integer amount in minor units plus a currency code into a display string.
//!
//! ## Two-stage strategy
//!
//! 1. **Primary**: a [`LocaleFormatter`] (by default [`IsoFormatter`]) renders the amount with
//!    locale rules: separators, grouping, symbol placement. It refuses codes that are not
//!    ISO 4217 and locales it does not know.
//! 2. **Fallback**: a static symbol table (unknown codes print themselves) rendered as
//!    `{symbol}{1,234.56}`. This path is deterministic and cannot fail.
//!
//! Failures never escape: every function here returns a `String`.
//!
//! ## Limitations
//!
//! Every currency is assumed to have two decimal minor units. Zero-decimal (JPY) and
//! three-decimal (BHD) currencies are still divided by 100.
//!
//! ```rust
//! use nestly_currency::{format_amount, symbol_only};
//!
//! assert_eq!(format_amount(150_000, "eur"), "€1,500.00");
//! assert_eq!(symbol_only("GBP"), "£");
//! assert_eq!(format_amount(995, "XYZ"), "XYZ9.95");
//! ```

mod error;
mod fallback;
mod formatter;
mod iso;
mod locale;

pub use crate::error::{CurrencyError, CurrencyErrorExt};
pub use crate::fallback::{fallback_symbol, format_fallback};
pub use crate::formatter::{CurrencyFormatter, format_amount, symbol_only};
pub use crate::iso::{IsoFormatter, LocaleFormatter, is_iso_currency};
pub use crate::locale::Locale;
pub use nestly_domain::currency::CurrencyCode;
