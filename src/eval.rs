use crate::common::*;
use crate::dice::Reduction;
use crate::error::{Error, Result};
use crate::parse::{
    self,
    ast::{Expression, Piece, Term},
    ParserError,
};
use crate::roll::{RollContext, Roller};
use std::fmt;

/// Evaluates `input` with the named reduction and the default roll context.
///
/// # Examples
/// ```
/// assert_eq!(dice_parser::evaluate("min", "2d6+1").unwrap(), 3);
/// assert_eq!(dice_parser::evaluate("max", "2d6+1").unwrap(), 13);
/// ```
///
/// # Errors
/// Fails with [Error::UnknownReduction] if `reduction` is not one of `roll`,
/// `min`, `max` or `average`, and otherwise as [evaluate_with].
pub fn evaluate(reduction: &str, input: &str) -> Result<Int> {
    let reduction = reduction.parse()?;
    let mut ctx: RollContext = RollContext::default();
    evaluate_with(reduction, input, &mut ctx)
}

/// Replaces every dice term in `input` with its reduced value, then collapses
/// the arithmetic strictly left to right. There is no operator precedence:
/// `2+3*4d1` is `(2+3)*4`.
///
/// # Errors
/// Fails with [ParserError] when `input` has no dice or an operand is not an
/// integer, and with [Error::ZeroDivision], [Error::Overflow] or
/// [Error::TooManyRolls] when the arithmetic or the roll budget fails.
pub fn evaluate_with<R: Roller>(
    reduction: Reduction,
    input: &str,
    ctx: &mut RollContext<R>,
) -> Result<Int> {
    tracing::debug!(input, %reduction, "evaluating dice expression");
    ctx.reset();

    let expr = parse::parse(input)?;
    let values = substitute(&expr, reduction, ctx)?;
    let result = reduce(items(&expr, &values))?;

    tracing::debug!(input, result, "evaluated dice expression");
    Ok(result)
}

fn substitute<R: Roller>(
    expr: &Expression,
    reduction: Reduction,
    ctx: &mut RollContext<R>,
) -> Result<Vec<Int>> {
    expr.occurrences()
        .iter()
        .map(|term| {
            let value = term.pool.reduce(reduction, ctx)?;
            tracing::trace!(term = term.slice, start = term.span.start, value, "substituted");
            Ok(value)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
enum Item<'a> {
    Operand(Value),
    Operator(BinaryOperator),
    Stray(&'a str),
}

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Text(String),
    Int(Int),
}

impl Value {
    fn resolve(&self) -> Result<Int, ParserError> {
        match self {
            Self::Int(x) => Ok(*x),
            Self::Text(s) => s.parse().map_err(|_| ParserError::new(s.as_str())),
        }
    }
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(Value::Text(s)) => f.write_str(s),
            Self::Operand(Value::Int(x)) => fmt::Display::fmt(x, f),
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::Stray(s) => f.write_str(s),
        }
    }
}

fn items<'a>(expr: &Expression<'a>, values: &[Int]) -> Vec<Item<'a>> {
    expr.terms()
        .iter()
        .map(|term| match term {
            Term::Operand(operand) => Item::Operand(operand_value(&operand.pieces, values)),
            Term::Operator(op) => Item::Operator(*op),
            Term::Stray(s) => Item::Stray(*s),
        })
        .collect()
}

fn operand_value(pieces: &[Piece], values: &[Int]) -> Value {
    if let [Piece::Dice(i)] = pieces {
        return Value::Int(values[*i]);
    }
    let text = pieces
        .iter()
        .map(|piece| match piece {
            Piece::Text(s) => s.to_string(),
            Piece::Dice(i) => values[*i].to_string(),
        })
        .collect();
    Value::Text(text)
}

// Pushing items one at a time and collapsing whenever the top of the stack is
// `operand operator operand` always reduces the leftmost triple first.
fn reduce(items: Vec<Item>) -> Result<Int> {
    let mut stack = Vec::with_capacity(items.len());
    for item in items {
        stack.push(item);
        while let Some(result) = collapse_top(&mut stack)? {
            push_result(&mut stack, result)?;
        }
    }
    finish(&stack)
}

fn collapse_top(stack: &mut Vec<Item>) -> Result<Option<Int>> {
    let result = match stack.as_slice() {
        [.., Item::Operand(lhs), Item::Operator(op), Item::Operand(rhs)] => {
            let (lhs, rhs) = (lhs.resolve()?, rhs.resolve()?);
            let result = op.apply(lhs, rhs)?;
            tracing::trace!(lhs, %op, rhs, result, "collapsed expression");
            result
        }
        _ => return Ok(None),
    };
    stack.truncate(stack.len() - 3);
    Ok(Some(result))
}

// Operands are unsigned words, so a negative result splits into a minus sign
// and its magnitude. The magnitude then takes part in the next collapse:
// `1 - 5 + 2` goes through `- 4 + 2` to `- 6`.
fn push_result(stack: &mut Vec<Item>, result: Int) -> Result<()> {
    if result < 0 {
        let magnitude = result.checked_neg().ok_or(Error::Overflow)?;
        stack.push(Item::Operator(BinaryOperator::Sub));
        stack.push(Item::Operand(Value::Int(magnitude)));
    } else {
        stack.push(Item::Operand(Value::Int(result)));
    }
    Ok(())
}

fn finish(stack: &[Item]) -> Result<Int> {
    match stack {
        [Item::Operand(value)] => Ok(value.resolve()?),
        [Item::Operator(BinaryOperator::Add), Item::Operand(value)] => Ok(value.resolve()?),
        [Item::Operator(BinaryOperator::Sub), Item::Operand(value)] => {
            value.resolve()?.checked_neg().ok_or(Error::Overflow)
        }
        rest => {
            let text = rest.iter().map(Item::to_string).collect::<Vec<_>>().join(" ");
            Err(ParserError::new(text).into())
        }
    }
}
