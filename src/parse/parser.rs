use super::{ast::*, error::ParserError, lexer::*};
use crate::common::NonEmpty;
use crate::dice::DicePool;
use crate::Result;
use std::ops::Range;

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    dice: Vec<DiceTerm<'a>>,
    terms: Vec<Term<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: lexer(source),
            dice: Vec::new(),
            terms: Vec::new(),
        }
    }

    pub fn parse(mut self) -> Result<Expression<'a>> {
        let source = self.source;
        while let Some((kind, span)) = self.lexer.next() {
            let slice = &source[span.clone()];
            if kind.is_word() {
                let piece = self.parse_piece(kind, slice, span.clone())?;
                self.push_piece(piece, span);
            } else if let Some(op) = kind.as_binary_op() {
                self.terms.push(Term::Operator(op));
            } else {
                self.terms.push(Term::Stray(slice));
            }
        }

        let dice =
            NonEmpty::try_from_vec(self.dice).map_err(|_| ParserError::new(source))?;
        Ok(Expression::new(source, dice, self.terms))
    }

    fn parse_piece(&mut self, kind: TokenKind, slice: &'a str, span: Range<usize>) -> Result<Piece<'a>> {
        if kind != TokenKind::Dice {
            return Ok(Piece::Text(slice));
        }
        let pool = parse_dice(slice)?;
        self.dice.push(DiceTerm::new(slice, span, pool));
        Ok(Piece::Dice(self.dice.len() - 1))
    }

    // Word tokens with no gap between them form a single operand.
    fn push_piece(&mut self, piece: Piece<'a>, span: Range<usize>) {
        match self.terms.last_mut() {
            Some(Term::Operand(operand)) if operand.span.end == span.start => {
                operand.extend(piece, span.end)
            }
            _ => self.terms.push(Term::Operand(Operand::new(piece, span))),
        }
    }
}

fn parse_dice(s: &str) -> Result<DicePool> {
    let (count, sides) = match s.split_once('d') {
        Some((count, sides)) => (Some(count), Some(sides)),
        None => (None, None),
    };
    Ok(DicePool::from_parts(count, sides)?)
}
