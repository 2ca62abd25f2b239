//! Persistent user settings: a small JSON object file of string keys.
//!
//! - **Atomic Writes**: every change rewrites the file through a unique temp file, `fsync`
//!   and `rename`, so readers never see a half-written file.
//! - **Self-Healing**: temp files abandoned by a crash are removed when the file is opened.
//! - **Typed access**: [`Settings::get_as`] / [`Settings::set_as`] for non-string values.
//!
//! [`Settings`] implements [`nestly_i18n::SettingsStore`], which is how the preferred
//! language survives restarts.

mod builder;
mod engine;
mod error;
mod maintenance;

pub use builder::SettingsBuilder;
pub use engine::{Settings, SettingsInner};
pub use error::{SettingsError, SettingsErrorExt};
