//! # Translations
//!
//! Key-based UI strings for the supported [`Language`]s.
//!
//! - [`Dictionary`]: immutable bundles, embedded from `locales/*.json` and parsed once.
//! - [`Translator`]: the current language plus a shared dictionary. `t` falls back to
//!   English, then to the key itself, so a lookup never fails.
//! - [`LanguagePreference`]: loads and stores the chosen language through any
//!   [`SettingsStore`]. Stored values are validated on load; junk becomes the default.

mod dictionary;
mod error;
mod preference;
mod translator;

pub use crate::dictionary::Dictionary;
pub use crate::error::{I18nError, I18nErrorExt};
pub use crate::preference::{LanguagePreference, SettingsStore};
pub use crate::translator::Translator;
pub use nestly_domain::language::Language;
