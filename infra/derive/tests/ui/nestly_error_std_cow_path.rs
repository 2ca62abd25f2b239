use nestly_derive::nestly_error;

#[nestly_error]
#[derive(Debug)]
pub enum DemoError {
    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected {
        message: std::borrow::Cow<'static, str>,
        context: Option<std::borrow::Cow<'static, str>>,
    },
}

fn main() {}
