use crate::error::Error;
use std::fmt::{self, Write};
use std::num::NonZeroU32;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    /// Applies the operator with checked arithmetic. Division floors toward
    /// negative infinity.
    pub fn apply(self, lhs: Int, rhs: Int) -> Result<Int, Error> {
        match self {
            Self::Add => lhs.checked_add(rhs).ok_or(Error::Overflow),
            Self::Sub => lhs.checked_sub(rhs).ok_or(Error::Overflow),
            Self::Mul => lhs.checked_mul(rhs).ok_or(Error::Overflow),
            Self::Div => floor_div(lhs, rhs),
        }
    }
}

fn floor_div(lhs: Int, rhs: Int) -> Result<Int, Error> {
    if rhs == 0 {
        return Err(Error::ZeroDivision);
    }
    let quot = lhs.checked_div(rhs).ok_or(Error::Overflow)?;
    if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
        Ok(quot - 1)
    } else {
        Ok(quot)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        };
        f.write_char(c)
    }
}
