use std::borrow::Cow;

#[nestly_derive::nestly_error]
pub enum NormalizerError {
    #[error("Upload policy rejected{}: {source}", format_context(.context))]
    Policy { source: nestly_uploads::UploadPolicyError, context: Option<Cow<'static, str>> },

    #[error("Translation error{}: {source}", format_context(.context))]
    I18n { source: nestly_i18n::I18nError, context: Option<Cow<'static, str>> },
}
