use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A file offered for upload, described by what the selection surface knows about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCandidate {
    #[serde(default)]
    pub name: Option<String>,
    pub size_bytes: u64,
    pub mime_type: String,
    /// Pixel dimensions `(width, height)`, when known for an image.
    #[serde(default)]
    pub dimensions: Option<(u32, u32)>,
}

impl FileCandidate {
    #[must_use]
    pub fn new(size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self { name: None, size_bytes, mime_type: mime_type.into(), dimensions: None }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }
}

/// The built-in upload use cases, each with its own policy.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UploadKind {
    /// Property listing photos.
    #[default]
    Image,
    /// Identity documents, contracts, payslips.
    Document,
    /// Profile pictures.
    Avatar,
}

/// Which policy rule a [`ValidationError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValidationField {
    Size,
    Type,
    Count,
    Dimensions,
}

/// A policy violation. Returned as data and used to drive user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: ValidationField,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: ValidationField, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
