//! Facade crate for the Nestly normalization components.
//! Re-exports domain/kernel primitives and the feature crates, and bundles them into a
//! [`Normalizer`] built from one [`AppConfig`].
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use nestly::{Normalizer, StatusSeverity, UploadKind, FileCandidate};
//!
//! let mut nestly = Normalizer::new(&Default::default()).unwrap();
//!
//! assert_eq!(nestly.format_amount(150_000, "EUR"), "€1,500.00");
//! assert_eq!(nestly.classify_status("ACTIVE"), StatusSeverity::Success);
//!
//! let photo = FileCandidate::new(6 * 1024 * 1024, "image/png");
//! assert_eq!(nestly.validate_file(UploadKind::Image, &photo).len(), 1);
//!
//! nestly.set_language("es").unwrap();
//! assert_eq!(nestly.label_for("fully_signed", None), "Firmado por ambas partes");
//! ```

mod error;
mod normalizer;

pub use crate::error::{NormalizerError, NormalizerErrorExt};
pub use crate::normalizer::{Normalizer, UploadPolicies};
pub use nestly_domain as domain;
pub use nestly_domain::config::AppConfig;
pub use nestly_domain::language::Language;
pub use nestly_domain::severity::StatusSeverity;
pub use nestly_domain::upload::{FileCandidate, UploadKind, ValidationError, ValidationField};
pub use nestly_kernel as kernel;

/// The feature crates, for APIs the facade does not wrap.
pub mod features {
    pub use nestly_currency as currency;
    pub use nestly_i18n as i18n;
    pub use nestly_status as status;
    pub use nestly_uploads as uploads;
}
