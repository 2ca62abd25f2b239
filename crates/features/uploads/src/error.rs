use std::borrow::Cow;

/// Errors raised while building an [`crate::UploadPolicy`].
#[nestly_derive::nestly_error]
pub enum UploadPolicyError {
    /// The policy would reject every file.
    #[error("Invalid upload policy{}: {message}", format_context(.context))]
    InvalidPolicy { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
