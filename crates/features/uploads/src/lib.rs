//! # Upload Validation
//!
//! Checks candidate files against a declarative [`UploadPolicy`] before they are submitted.
//!
//! Violations are reported as data ([`ValidationError`]), never as `Err` or panics: the
//! caller decides what a non-empty list means (usually disabling the submit button and
//! showing the messages). Only building a policy from untrusted configuration can fail.
//!
//! ```rust
//! use nestly_uploads::{FileCandidate, UploadPolicy, ValidationField, format_size, validate_file};
//!
//! let policy = UploadPolicy::image();
//! let file = FileCandidate::new(8 * 1024 * 1024, "image/bmp");
//!
//! let errors = validate_file(&file, &policy);
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].field, ValidationField::Size);
//! assert_eq!(errors[1].field, ValidationField::Type);
//! assert_eq!(format_size(1536), "1.5 KB");
//! ```

mod error;
mod policy;
mod size;
mod validator;

pub use crate::error::{UploadPolicyError, UploadPolicyErrorExt};
pub use crate::policy::UploadPolicy;
pub use crate::size::format_size;
pub use crate::validator::{BatchReport, Validator, validate_batch, validate_file};
pub use nestly_domain::upload::{FileCandidate, ValidationError, ValidationField};
