//! String constants shared between the feature crates and their callers.

// MIME types accepted by the built-in upload policies.
pub const MIME_JPEG: &str = "image/jpeg";
pub const MIME_PNG: &str = "image/png";
pub const MIME_WEBP: &str = "image/webp";
pub const MIME_GIF: &str = "image/gif";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Settings key under which the preferred UI language is persisted.
pub const LANGUAGE_SETTING_KEY: &str = "language";

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Number of minor units in one major unit. Every currency is treated as two-decimal.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;
