use crate::common::*;
use crate::dice::DicePool;
use std::ops::Range;

/// A parsed input: every dice occurrence in source order plus the sequence of
/// operands, operators and unrecognized text around them.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression<'a> {
    pub(crate) source: &'a str,
    pub(crate) dice: NonEmpty<DiceTerm<'a>>,
    pub(crate) terms: Vec<Term<'a>>,
}

impl<'a> Expression<'a> {
    pub(crate) fn new(source: &'a str, dice: NonEmpty<DiceTerm<'a>>, terms: Vec<Term<'a>>) -> Self {
        Self { source, dice, terms }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The dice terms found in the input. Never empty; textually identical
    /// terms appear once per occurrence.
    pub fn occurrences(&self) -> &[DiceTerm<'a>] {
        self.dice.as_slice()
    }

    pub fn terms(&self) -> &[Term<'a>] {
        &self.terms
    }
}

/// One textual appearance of a dice term.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DiceTerm<'a> {
    pub slice: &'a str,
    pub span: Range<usize>,
    pub pool: DicePool,
}

impl<'a> DiceTerm<'a> {
    pub(crate) fn new(slice: &'a str, span: Range<usize>, pool: DicePool) -> Self {
        Self { slice, span, pool }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Term<'a> {
    Operand(Operand<'a>),
    Operator(BinaryOperator),
    Stray(&'a str),
}

/// A run of adjacent word tokens, e.g. `12`, `3d6` or `x2d4`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Operand<'a> {
    pub pieces: Vec<Piece<'a>>,
    pub span: Range<usize>,
}

impl<'a> Operand<'a> {
    pub(crate) fn new(piece: Piece<'a>, span: Range<usize>) -> Self {
        Self {
            pieces: vec![piece],
            span,
        }
    }

    pub(crate) fn extend(&mut self, piece: Piece<'a>, end: usize) {
        self.pieces.push(piece);
        self.span.end = end;
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Piece<'a> {
    Text(&'a str),
    /// Index into [Expression::occurrences].
    Dice(usize),
}
