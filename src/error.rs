use crate::dice::ParseDiceError;
use crate::parse::ParserError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParserError),
    #[error("unknown reduction {0:?}; expected one of 'roll', 'min', 'max', or 'average'")]
    UnknownReduction(String),
    #[error("malformed dice term: {0}")]
    MalformedDiceTerm(#[from] ParseDiceError),
    #[error("cannot divide by zero")]
    ZeroDivision,
    #[error("integer overflow")]
    Overflow,
    #[error("too many dice rolled")]
    TooManyRolls,
}

impl Error {
    pub fn unknown_reduction(name: impl ToString) -> Self {
        Self::UnknownReduction(name.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
