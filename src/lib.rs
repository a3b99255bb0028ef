//! Parsing and evaluation of standard dice notation, `[count]d<sides>`, mixed
//! with integer arithmetic.
//!
//! ```
//! use dice_parser::{evaluate, Reduction};
//!
//! assert_eq!(evaluate("average", "2d6").unwrap(), 7);
//! assert!(evaluate("explode", "2d6").is_err());
//! assert_eq!("min".parse::<Reduction>().unwrap(), Reduction::Min);
//! ```

mod common;
mod dice;
mod error;
mod eval;
pub mod parse;
pub mod roll;

#[cfg(test)]
mod test_strategies;

pub use common::{BinaryOperator, Int, NonZeroUInt, UInt};
pub use dice::{DicePool, ParseDiceError, Reduction};
pub use error::{Error, Result};
pub use eval::{evaluate, evaluate_with};
pub use parse::{parse, ParserError};
pub use roll::{DefaultRoller, RollContext, Roller};
