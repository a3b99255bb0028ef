use thiserror::Error;

/// Input that could not be understood, either because it holds no dice at all
/// or because something other than an integer was left where a number belongs.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("Unable to parse '{text}'")]
pub struct ParserError {
    pub text: String,
}

impl ParserError {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
