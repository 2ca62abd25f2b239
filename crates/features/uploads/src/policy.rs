use crate::error::UploadPolicyError;
use nestly_domain::config::PolicyConfig;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Declarative constraints a candidate file must satisfy.
///
/// Always holds a positive size limit and at least one allowed MIME type; both are checked
/// on construction and on deserialization. Policy MIME entries are trimmed and lowercased;
/// candidate types are matched against them exactly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "PolicyConfig")]
pub struct UploadPolicy {
    max_size_bytes: u64,
    allowed_mime_types: BTreeSet<String>,
    max_width: Option<u32>,
    max_height: Option<u32>,
    max_files: Option<usize>,
}

impl UploadPolicy {
    /// Creates a policy from a size limit and the accepted MIME types.
    ///
    /// # Errors
    /// Returns [`UploadPolicyError::InvalidPolicy`] if `max_size_bytes` is zero or no
    /// (non-blank) MIME type is given.
    pub fn new<I, S>(max_size_bytes: u64, allowed_mime_types: I) -> Result<Self, UploadPolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if max_size_bytes == 0 {
            return Err(UploadPolicyError::InvalidPolicy {
                message: "max_size_bytes must be greater than zero".into(),
                context: None,
            });
        }

        let allowed_mime_types: BTreeSet<String> = allowed_mime_types
            .into_iter()
            .map(|m| normalize_entry(m.as_ref()))
            .filter(|m| !m.is_empty())
            .collect();

        if allowed_mime_types.is_empty() {
            return Err(UploadPolicyError::InvalidPolicy {
                message: "allowed_mime_types must not be empty".into(),
                context: None,
            });
        }

        Ok(Self {
            max_size_bytes,
            allowed_mime_types,
            max_width: None,
            max_height: None,
            max_files: None,
        })
    }

    /// Limits image dimensions. Only enforced for candidates that carry dimensions.
    #[must_use]
    pub const fn with_max_dimensions(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// Limits how many files a single batch may contain.
    #[must_use]
    pub const fn with_max_files(mut self, max_files: Option<usize>) -> Self {
        self.max_files = max_files;
        self
    }

    /// Listing photos: 5 MB, JPEG/PNG/WebP/GIF, up to 20 per batch.
    #[must_use]
    pub fn image() -> Self {
        Self::from_preset(PolicyConfig::image())
    }

    /// Identity documents and contracts: 10 MB, PDF/images/Word, up to 10 per batch.
    #[must_use]
    pub fn document() -> Self {
        Self::from_preset(PolicyConfig::document())
    }

    /// Profile pictures: 2 MB, JPEG/PNG/WebP, at most 1024x1024, a single file.
    #[must_use]
    pub fn avatar() -> Self {
        Self::from_preset(PolicyConfig::avatar())
    }

    #[must_use]
    pub const fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    #[must_use]
    pub const fn allowed_mime_types(&self) -> &BTreeSet<String> {
        &self.allowed_mime_types
    }

    #[must_use]
    pub const fn max_width(&self) -> Option<u32> {
        self.max_width
    }

    #[must_use]
    pub const fn max_height(&self) -> Option<u32> {
        self.max_height
    }

    #[must_use]
    pub const fn max_files(&self) -> Option<usize> {
        self.max_files
    }

    /// Whether `mime_type` is one of the allowed types, compared exactly.
    #[must_use]
    pub fn allows(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.contains(mime_type)
    }

    fn from_preset(config: PolicyConfig) -> Self {
        Self {
            max_size_bytes: config.max_size_bytes,
            allowed_mime_types: config.allowed_mime_types.iter().map(|m| normalize_entry(m)).collect(),
            max_width: config.max_width,
            max_height: config.max_height,
            max_files: config.max_files,
        }
    }
}

impl TryFrom<PolicyConfig> for UploadPolicy {
    type Error = UploadPolicyError;

    fn try_from(config: PolicyConfig) -> Result<Self, Self::Error> {
        Self::try_from(&config)
    }
}

impl TryFrom<&PolicyConfig> for UploadPolicy {
    type Error = UploadPolicyError;

    fn try_from(config: &PolicyConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(config.max_size_bytes, &config.allowed_mime_types)?
            .with_max_dimensions(config.max_width, config.max_height)
            .with_max_files(config.max_files))
    }
}

fn normalize_entry(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}
