use nestly_derive::nestly_error;
use std::borrow::Cow;

#[nestly_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, DemoError> {
    std::fs::read_to_string("missing").context("Reading demo file")
}

fn main() {
    let _ = read();
    let _: DemoError = "boom".into();
}
