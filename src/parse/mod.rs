pub mod ast;
mod error;
mod lexer;
mod parser;

pub use error::ParserError;

/// Finds every dice term in `s` and splits the rest into operands and
/// operators.
///
/// # Examples
/// ```
/// let expr = dice_parser::parse("1d6 + 4 + 1d6").unwrap();
/// assert_eq!(expr.occurrences().len(), 2);
/// assert_eq!(expr.occurrences()[1].span, 10..13);
/// ```
///
/// A count or side number of zero is rejected rather than treated as an empty
/// pool, so `0d6` does not reduce to 0:
///
/// ```
/// assert!(matches!(
///     dice_parser::parse("0d6 + 1"),
///     Err(dice_parser::Error::MalformedDiceTerm(_))
/// ));
/// ```
///
/// # Errors
/// Fails with [ParserError] when `s` contains no dice term, and with
/// [crate::Error::MalformedDiceTerm] when a term has zero dice or sides, or a
/// number too large for a `u32`.
pub fn parse(s: &str) -> crate::Result<ast::Expression> {
    parser::Parser::new(s).parse()
}
