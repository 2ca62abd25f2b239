use crate::policy::UploadPolicy;
use crate::size::format_size;
use nestly_domain::upload::{FileCandidate, ValidationError, ValidationField};
use tracing::debug;

/// Checks a single file against `policy`.
///
/// Rules are independent and evaluated in a fixed order: size, type, dimensions. An empty
/// result means the file is acceptable.
#[must_use]
pub fn validate_file(file: &FileCandidate, policy: &UploadPolicy) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if file.size_bytes > policy.max_size_bytes() {
        errors.push(ValidationError::new(
            ValidationField::Size,
            format!("File size exceeds the maximum of {}", format_size(policy.max_size_bytes())),
        ));
    }

    if !policy.allows(&file.mime_type) {
        let mime = file.mime_type.as_str();
        let shown = if mime.trim().is_empty() { "unknown" } else { mime };
        errors.push(ValidationError::new(
            ValidationField::Type,
            format!("File type {shown} is not allowed"),
        ));
    }

    if let Some(error) = check_dimensions(file, policy) {
        errors.push(error);
    }

    errors
}

/// Checks a selection of files: the batch size first, then every file on its own.
#[must_use]
pub fn validate_batch(files: &[FileCandidate], policy: &UploadPolicy) -> BatchReport {
    let count_error = policy.max_files().filter(|max| files.len() > *max).map(|max| {
        ValidationError::new(
            ValidationField::Count,
            format!("Too many files: {} selected, at most {max} allowed", files.len()),
        )
    });

    let per_file = files.iter().map(|file| validate_file(file, policy)).collect();

    BatchReport { count_error, per_file }
}

fn check_dimensions(file: &FileCandidate, policy: &UploadPolicy) -> Option<ValidationError> {
    let (width, height) = file.dimensions?;
    let too_wide = policy.max_width().is_some_and(|max| width > max);
    let too_tall = policy.max_height().is_some_and(|max| height > max);

    if !too_wide && !too_tall {
        return None;
    }

    let limit = |v: Option<u32>| v.map_or_else(|| "any".to_owned(), |v| v.to_string());
    Some(ValidationError::new(
        ValidationField::Dimensions,
        format!(
            "Image dimensions {width}x{height} exceed the maximum of {}x{}",
            limit(policy.max_width()),
            limit(policy.max_height())
        ),
    ))
}

/// Outcome of [`validate_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Set when the selection holds more files than the policy allows.
    pub count_error: Option<ValidationError>,
    /// Errors for each file, in selection order.
    pub per_file: Vec<Vec<ValidationError>>,
}

impl BatchReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.count_error.is_none() && self.per_file.iter().all(Vec::is_empty)
    }

    /// Indices of files that failed at least one rule.
    pub fn rejected(&self) -> impl Iterator<Item = usize> + '_ {
        self.per_file.iter().enumerate().filter(|(_, e)| !e.is_empty()).map(|(i, _)| i)
    }

    /// Every error in the report, batch-level first.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.count_error.iter().chain(self.per_file.iter().flatten())
    }
}

/// A policy bound to a use case, logging rejections.
#[derive(Debug, Clone)]
pub struct Validator {
    name: &'static str,
    policy: UploadPolicy,
}

impl Validator {
    #[must_use]
    pub const fn new(name: &'static str, policy: UploadPolicy) -> Self {
        Self { name, policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn validate(&self, file: &FileCandidate) -> Vec<ValidationError> {
        let errors = validate_file(file, &self.policy);
        if !errors.is_empty() {
            debug!(
                policy = self.name,
                file = file.name.as_deref().unwrap_or("<unnamed>"),
                size = file.size_bytes,
                mime = %file.mime_type,
                violations = errors.len(),
                "Upload rejected"
            );
        }
        errors
    }

    #[must_use]
    pub fn validate_batch(&self, files: &[FileCandidate]) -> BatchReport {
        let report = validate_batch(files, &self.policy);
        if !report.is_valid() {
            debug!(
                policy = self.name,
                files = files.len(),
                rejected = report.rejected().count(),
                over_limit = report.count_error.is_some(),
                "Upload batch rejected"
            );
        }
        report
    }
}
