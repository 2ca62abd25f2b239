use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Closed visual classification used to colour and iconize a status badge.
///
/// Independent of the backend status vocabulary, which is open.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatusSeverity {
    Default,
    Success,
    Warning,
    Destructive,
    Outline,
    #[default]
    Secondary,
    Neutral,
}
