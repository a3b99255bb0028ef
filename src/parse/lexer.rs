use crate::common::BinaryOperator;
use logos::Logos;
use std::fmt;

pub type Lexer<'a> = logos::SpannedIter<'a, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).spanned()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]*d[0-9]+")]
    Dice,
    #[regex(r"[0-9]+")]
    Digits,
    // 'd' is lexed on its own so that a dice term directly after a word is
    // still recognized.
    #[regex(r"[a-ce-zA-Z_]+")]
    Letters,
    #[token("d")]
    D,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    /// Dice, digits and letters all belong to operands.
    pub fn is_word(&self) -> bool {
        matches!(self, Self::Dice | Self::Digits | Self::Letters | Self::D)
    }

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Dice => "<dice>",
            Digits => "<digits>",
            Letters => "<letters>",
            D => "'d'",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            Error => "<error>",
        }
    }

    pub fn as_binary_op(&self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
